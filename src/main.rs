use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tenpull::build_info;
use tenpull::catalog::GachaCatalog;
use tenpull::events::{fetch_schedule, find_event, format_event_reply, DEFAULT_SCHEDULE_URL};
use tenpull::gacha::{parse_seed, simulate_ten_pull};
use tenpull::report::DrawReport;
use tenpull::ui::{draw_results, SeedEntryScreen};

enum Screen {
    SeedEntry,
    Results,
}

#[derive(Default)]
struct CliOptions {
    seed: Option<String>,
    random: bool,
    catalog: Option<String>,
    json: bool,
    save: bool,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "sale" => {
                run_sale_command(&args);
            }
            "--version" | "-v" => {
                println!(
                    "tenpull {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
    }

    let options = parse_args(&args);

    let catalog = match &options.catalog {
        Some(source) => match GachaCatalog::load(source) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to load catalog from {}: {}", source, e);
                std::process::exit(1);
            }
        },
        None => GachaCatalog::builtin(),
    };

    // A seed on the command line means headless mode
    if options.seed.is_some() || options.random {
        let seed = match &options.seed {
            Some(text) => match parse_seed(text) {
                Ok(seed) => seed,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            },
            None => rand::thread_rng().gen::<u32>(),
        };
        return run_headless(seed, &catalog, &options);
    }

    run_tui(&catalog)
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.seed = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-c" | "--catalog" => {
                if i + 1 < args.len() {
                    options.catalog = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--random" => {
                options.random = true;
            }
            "--json" => {
                options.json = true;
            }
            "--save" => {
                options.save = true;
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn run_headless(seed: u32, catalog: &GachaCatalog, options: &CliOptions) -> io::Result<()> {
    let results = match simulate_ten_pull(seed, &catalog.slots, &catalog.rarity_thresholds) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let report = DrawReport::new(seed, results);

    if options.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }

    if options.save {
        let filename = format!(
            "tenpull_{}_{}.json",
            seed,
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

/// `tenpull sale <ID> [URL]` answers a schedule lookup the way the
/// chat bot does.
fn run_sale_command(args: &[String]) -> ! {
    let id = match args.get(2) {
        Some(id) => id,
        None => {
            eprintln!("Usage: tenpull sale <ID> [URL]");
            std::process::exit(1);
        }
    };
    let url = args
        .get(3)
        .map(String::as_str)
        .unwrap_or(DEFAULT_SCHEDULE_URL);

    match fetch_schedule(url) {
        Ok(records) => match find_event(&records, id) {
            Some(record) => {
                println!("{}", format_event_reply(record));
                std::process::exit(0);
            }
            None => {
                println!("ID {} was not found", id);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Failed to fetch schedule: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_tui(catalog: &GachaCatalog) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = tui_loop(&mut terminal, catalog);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalog: &GachaCatalog,
) -> io::Result<()> {
    let mut current_screen = Screen::SeedEntry;
    let mut entry_screen = SeedEntryScreen::new();
    let mut report: Option<DrawReport> = None;

    loop {
        match current_screen {
            Screen::SeedEntry => {
                terminal.draw(|f| {
                    let area = f.size();
                    entry_screen.draw(f, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            KeyCode::Char('r') => {
                                let seed = rand::thread_rng().gen::<u32>();
                                entry_screen.set_input(seed.to_string());
                            }
                            KeyCode::Char(c) => {
                                entry_screen.handle_char_input(c);
                            }
                            KeyCode::Backspace => {
                                entry_screen.handle_backspace();
                            }
                            KeyCode::Enter => {
                                if let Some(seed) = entry_screen.parsed_seed() {
                                    match simulate_ten_pull(
                                        seed,
                                        &catalog.slots,
                                        &catalog.rarity_thresholds,
                                    ) {
                                        Ok(results) => {
                                            report = Some(DrawReport::new(seed, results));
                                            current_screen = Screen::Results;
                                        }
                                        Err(e) => {
                                            entry_screen.validation_error = Some(e.to_string());
                                        }
                                    }
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }

            Screen::Results => {
                let current = match &report {
                    Some(current) => current,
                    None => {
                        current_screen = Screen::SeedEntry;
                        continue;
                    }
                };

                terminal.draw(|f| {
                    let area = f.size();
                    draw_results(f, area, current);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            KeyCode::Enter => {
                                current_screen = Screen::SeedEntry;
                            }
                            KeyCode::Char('r') => {
                                let seed = rand::thread_rng().gen::<u32>();
                                entry_screen.set_input(seed.to_string());
                                if let Ok(results) = simulate_ten_pull(
                                    seed,
                                    &catalog.slots,
                                    &catalog.rarity_thresholds,
                                ) {
                                    report = Some(DrawReport::new(seed, results));
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Tenpull - Deterministic Seeded Draw Simulator\n");
    println!("USAGE:");
    println!("    tenpull [OPTIONS]");
    println!("    tenpull sale <ID> [URL]\n");
    println!("OPTIONS:");
    println!("    -s, --seed <N>      Run headless with seed N and print the results");
    println!("    --random            Run headless with a random seed");
    println!("    -c, --catalog <SRC> Load the slot catalog from a file or URL");
    println!("    --json              Print the headless report as JSON");
    println!("    --save              Also save the JSON report to a timestamped file");
    println!("    --version           Show version information");
    println!("    -h, --help          Show this help message\n");
    println!("With no options the interactive terminal UI starts.\n");
    println!("EXAMPLES:");
    println!("    tenpull                      # Interactive UI");
    println!("    tenpull --seed 12345         # Reproducible ten-pull");
    println!("    tenpull --seed 12345 --json  # Same, as JSON");
    println!("    tenpull sale 101             # Look up event 101 in the schedule");
}
