// stepviz: step-by-step data structure operation visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stepviz::catalog::{Family, Operation};
use stepviz::config::{Config, Mode, Scale, SPEED_ENV};
use stepviz::logging;
use stepviz::session::Session;
use stepviz::ui::panes::{plain_text, structure_lines};
use stepviz::ui::theme::DEFAULT_THEME;
use stepviz::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [operation] [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --speed <0.5|1|1.5|2>   Auto-play speed (env {})", SPEED_ENV);
    eprintln!("      --scale <0.5..2.0>       Cell width multiplier");
    eprintln!("  -l, --list                  List every operation and exit");
    eprintln!("  -d, --dump                  Print every step as text and exit");
    eprintln!("  -h, --help                  Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} heap-insert              # Watch a max-heap insertion", program_name);
    eprintln!("  {} bubble-sort --dump       # Print the sort step by step", program_name);
}

fn print_catalog() {
    for family in Family::ALL {
        println!("{}", family.name());
        for operation in Operation::ALL.iter().filter(|op| op.family() == family) {
            let (time, space) = operation.complexity();
            println!(
                "  {:<26} {:<34} time {:<10} space {}",
                operation.id(),
                operation.title(),
                time,
                space
            );
        }
    }
}

fn print_steps(session: &Session, scale: Scale) {
    let Some(sequence) = session.sequence() else {
        println!("Visualization not available for this operation.");
        return;
    };
    let total = sequence.len();
    for (index, snapshot) in sequence.steps().iter().enumerate() {
        if let Some(meta) = sequence.meta(index) {
            println!("Step {}/{}: {}", index + 1, total, meta.title);
            println!("  {}", meta.description);
        }
        for line in plain_text(&structure_lines(snapshot, &DEFAULT_THEME, scale)) {
            println!("    {}", line);
        }
        println!();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program_name = std::env::args()
        .next()
        .unwrap_or_else(|| "stepviz".to_string());

    let config = match Config::from_args(std::env::args().skip(1), std::env::var(SPEED_ENV).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&program_name);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match config.mode {
        Mode::Help => {
            print_usage(&program_name);
            return Ok(());
        }
        Mode::List => {
            print_catalog();
            return Ok(());
        }
        Mode::Dump | Mode::Interactive => {}
    }

    let mut session = Session::new(config.speed);
    if let Err(e) = session.select(&config.operation) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if config.mode == Mode::Dump {
        print_steps(&session, config.scale);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, config.scale);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
