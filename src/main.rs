//! Triangle Buttons console host
//!
//! Stands in for the game: reads host events from stdin, delivers them to one
//! module and prints what the module asked the host to do.

use std::io::{self, BufRead, Write};

use triangle_buttons::{
    Direction, HostCall, HostEvent, ModuleIds, RecordingHost, Settings, Slot, TriangleButtons,
};

const HELP: &str = "\
commands:
  activate          start the countdown (shuffles the arrows)
  deactivate        cancel the countdown
  timeout           let the countdown run out
  press <button>    press a button: 0-3, tl, tr, bl, br
  show              draw the arrows
  stats             print the module's tally
  help              this text
  quit              exit";

/// One parsed console line
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Event(HostEvent),
    Show,
    Stats,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Err(String::new());
    };
    match word.to_lowercase().as_str() {
        "activate" | "a" => Ok(Command::Event(HostEvent::Activate)),
        "deactivate" | "d" => Ok(Command::Event(HostEvent::Deactivate)),
        "timeout" | "t" => Ok(Command::Event(HostEvent::TimerExpired)),
        "press" | "p" => {
            let arg = words.next().ok_or("press needs a button: 0-3, tl, tr, bl, br")?;
            Slot::from_str(arg)
                .map(|slot| Command::Event(HostEvent::Interact(slot)))
                .ok_or_else(|| format!("no such button: {arg}"))
        }
        "show" | "s" => Ok(Command::Show),
        "stats" => Ok(Command::Stats),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other}")),
    }
}

fn glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '↑',
        Direction::Right => '→',
        Direction::Down => '↓',
        Direction::Left => '←',
    }
}

fn describe(call: &HostCall) -> String {
    match call {
        HostCall::Strike => "STRIKE".to_string(),
        HostCall::Pass => "pass".to_string(),
        HostCall::Sound(effect) => format!("sound {}", effect.as_str()),
        HostCall::Punch { button, intensity } => format!("punch {button} ({intensity:.2})"),
        HostCall::Rotate {
            slot,
            euler_degrees,
        } => format!(
            "rotate {slot} to ({:.0}, {:.0}, {:.0})",
            euler_degrees.x, euler_degrees.y, euler_degrees.z
        ),
        HostCall::Visible { slot, visible } => {
            format!("{} {slot}", if *visible { "show" } else { "hide" })
        }
    }
}

fn show(module: &TriangleButtons) {
    match module.orientation() {
        Some(o) => {
            let g = |slot| glyph(o.direction(slot));
            println!("  {} {}", g(Slot::TopLeft), g(Slot::TopRight));
            println!("  {} {}", g(Slot::BottomLeft), g(Slot::BottomRight));
        }
        None => println!("  (arrows hidden)"),
    }
}

fn print_stats(module: &TriangleButtons) {
    let stats = module.stats();
    println!(
        "  activations {}, correct {}, incorrect {}, timeouts {}, deactivations {}, ignored presses {}",
        stats.activations,
        stats.correct,
        stats.incorrect,
        stats.timeouts,
        stats.deactivations,
        stats.ignored_presses
    );
    match stats.solve_rate() {
        Some(rate) => println!("  strikes {}, solve rate {:.0}%", stats.strikes(), rate * 100.0),
        None => println!("  strikes {}", stats.strikes()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Triangle Buttons console host starting...");

    let settings = std::env::args()
        .nth(1)
        .map(Settings::load_from)
        .unwrap_or_default();

    let mut ids = ModuleIds::new();
    let mut module = TriangleButtons::new(ids.next_id(), settings);
    let mut host = RecordingHost::new();

    println!("{HELP}");
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::warn!("Failed to read stdin: {}", e);
                break;
            }
        }

        match parse_command(&line) {
            Ok(Command::Event(event)) => {
                let outcome = module.handle(event, &mut host);
                for call in host.drain() {
                    println!("  {}", describe(&call));
                }
                if let Some(outcome) = outcome {
                    println!("  => {outcome:?}");
                }
                if matches!(event, HostEvent::Activate) {
                    show(&module);
                }
            }
            Ok(Command::Show) => show(&module),
            Ok(Command::Stats) => print_stats(&module),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(msg) if msg.is_empty() => {}
            Err(msg) => println!("  {msg}\n{HELP}"),
        }
    }

    print_stats(&module);
    log::info!("Bomb host totals: {} strikes, {} passes", host.strikes, host.passes);
}
