use schedule_planner::{PersistenceError, Scheduler, SchedulerConfig};
use std::io::{self, BufRead, Write};

const SHORT_HEADERS: [&str; 4] = ["Name", "Section", "Title", "Meeting"];
const LONG_HEADERS: [&str; 7] = [
    "Name",
    "Section",
    "Title",
    "Credits",
    "Instructor",
    "Meeting",
    "Details",
];

fn render_text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    // Index column first, then the requested columns
    let mut col_names: Vec<String> = vec!["#".to_string()];
    col_names.extend(headers.iter().map(|h| h.to_string()));
    let rows: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut cells = vec![idx.to_string()];
            cells.extend(row.iter().cloned());
            cells
        })
        .collect();

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.chars().count()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if ci < widths.len() && len > widths[ci] {
                widths[ci] = len;
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (ci, width) in widths.iter().enumerate() {
            let cell = cells.get(ci).map(String::as_str).unwrap_or("");
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(width.saturating_sub(cell.chars().count())));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&col_names[..]));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(&row[..]));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  catalog                            Show the course catalog\n  show                               Show the schedule\n  full                               Show the schedule with every column\n  add <name> <section>               Add a catalog course (e.g. add CSC 216 001)\n  event <title>|<days>|<start>|<end>|<details>\n                                     Add a personal event (e.g. event Gym|MWF|900|1000|Cardio)\n  remove <index>                     Remove the activity at <index>\n  reset                              Clear the schedule\n  title [text...]                    Show or set the schedule title\n  load <path>                        Load a course catalog (clears the schedule)\n  export <path>                      Export the schedule\n  quit|exit                          Exit"
    );
}

fn print_schedule(scheduler: &Scheduler) {
    println!("{}", scheduler.schedule_title());
    let rows: Vec<Vec<String>> = scheduler
        .scheduled_activities()
        .into_iter()
        .map(Vec::from)
        .collect();
    println!("{}", render_text_table(&SHORT_HEADERS, &rows));
}

fn print_full_schedule(scheduler: &Scheduler) {
    println!("{}", scheduler.schedule_title());
    let rows: Vec<Vec<String>> = scheduler
        .full_scheduled_activities()
        .into_iter()
        .map(Vec::from)
        .collect();
    println!("{}", render_text_table(&LONG_HEADERS, &rows));
}

fn print_catalog(scheduler: &Scheduler) {
    let rows: Vec<Vec<String>> = scheduler
        .course_catalog()
        .into_iter()
        .map(Vec::from)
        .collect();
    println!("{}", render_text_table(&SHORT_HEADERS, &rows));
}

fn print_persistence_error(err: &PersistenceError) {
    println!("Error: {err} ({})", err.path().display());
}

fn handle_add(scheduler: &mut Scheduler, args: &[&str]) {
    let Some((section, name_parts)) = args.split_last() else {
        println!("Usage: add <name> <section>");
        return;
    };
    if name_parts.is_empty() {
        println!("Usage: add <name> <section>");
        return;
    }
    let name = name_parts.join(" ");
    match scheduler.add_course_to_schedule(&name, section) {
        Ok(true) => {
            println!("Added {name} {section} to the schedule.");
            print_schedule(scheduler);
        }
        Ok(false) => println!("{name} {section} is not in the catalog."),
        Err(e) => println!("Error: {e}"),
    }
}

fn handle_event(scheduler: &mut Scheduler, rest: &str) {
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    if fields.len() < 4 || fields.len() > 5 {
        println!("Usage: event <title>|<days>|<start>|<end>|<details>");
        return;
    }
    let start: i32 = match fields[2].parse() {
        Ok(v) => v,
        Err(_) => {
            println!("Invalid start time");
            return;
        }
    };
    let end: i32 = match fields[3].parse() {
        Ok(v) => v,
        Err(_) => {
            println!("Invalid end time");
            return;
        }
    };
    let details = fields.get(4).copied().unwrap_or("");
    match scheduler.add_event_to_schedule(fields[0], fields[1], start, end, details) {
        Ok(()) => {
            println!("Added event {}.", fields[0]);
            print_schedule(scheduler);
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let mut config = SchedulerConfig::default().with_env_overrides();
    if let Some(path) = std::env::args().nth(1) {
        config.catalog_path = Some(path.into());
    }

    let mut scheduler = match Scheduler::from_config(&config) {
        Ok(scheduler) => scheduler,
        Err(e) => {
            print_persistence_error(&e);
            Scheduler::new()
        }
    };

    println!("Schedule Planner (CLI) - type 'help' for commands\n");
    print_schedule(&scheduler);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, rest) = input
            .split_once(char::is_whitespace)
            .map(|(cmd, rest)| (cmd, rest.trim()))
            .unwrap_or((input, ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "catalog" => print_catalog(&scheduler),
            "show" => print_schedule(&scheduler),
            "full" => print_full_schedule(&scheduler),
            "add" => handle_add(&mut scheduler, &args),
            "event" => handle_event(&mut scheduler, rest),
            "remove" => match args.first().map(|s| s.parse::<usize>()) {
                Some(Ok(index)) => {
                    if scheduler.remove_activity_from_schedule(index) {
                        println!("Removed activity {index}.");
                        print_schedule(&scheduler);
                    } else {
                        println!("No activity at position {index}.");
                    }
                }
                Some(Err(_)) => println!("Invalid index"),
                None => println!("Usage: remove <index>"),
            },
            "reset" => {
                scheduler.reset_schedule();
                println!("Schedule cleared.");
            }
            "title" => {
                if rest.is_empty() {
                    println!("{}", scheduler.schedule_title());
                } else {
                    scheduler.set_schedule_title(rest);
                    println!("Schedule title set to '{rest}'.");
                }
            }
            "load" => match args.first() {
                Some(path) => match Scheduler::from_catalog_file(path) {
                    Ok(mut loaded) => {
                        loaded.set_schedule_title(scheduler.schedule_title());
                        scheduler = loaded;
                        println!(
                            "Catalog loaded from {path} ({} courses).",
                            scheduler.catalog().len()
                        );
                    }
                    Err(e) => print_persistence_error(&e),
                },
                None => println!("Usage: load <path>"),
            },
            "export" => match args.first() {
                Some(path) => match scheduler.export_schedule(path) {
                    Ok(()) => println!("Schedule exported to {path}."),
                    Err(e) => print_persistence_error(&e),
                },
                None => println!("Usage: export <path>"),
            },
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }
    }
}
