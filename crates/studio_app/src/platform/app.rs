use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use console::{style, Term};
use engine_logging::{engine_info, engine_warn};
use studio_core::{update, AppState, Msg};

use super::config::{self, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::render;

/// How long the loop waits for typed input before polling the engine again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("reading working directory")?;
    let loaded = config::load_from(&cwd);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };

    logging::initialize(config.log_destination);
    match loaded {
        Ok(Some(_)) => engine_info!("Loaded {} from {:?}", CONFIG_FILENAME, cwd),
        Ok(None) => engine_info!("No {} found; using defaults", CONFIG_FILENAME),
        Err(err) => engine_warn!("Ignoring config: {}", err),
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(&config, msg_tx).context("starting scrape engine")?;
    let lines = spawn_stdin_reader();

    let term = Term::stdout();
    let mut state = AppState::new();
    let mut footer = Some(HELP.to_string());
    draw(&term, &state, footer.as_deref())?;

    loop {
        runner.forward_engine_events();
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, &runner);
        }

        let mut redraw = false;
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                redraw = true;
                footer = None;
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => footer = Some(HELP.to_string()),
                    Ok(command) => match command.into_msgs(&state.view()) {
                        Ok(msgs) => {
                            for msg in msgs {
                                dispatch(&mut state, msg, &runner);
                            }
                        }
                        Err(err) => footer = Some(err.to_string()),
                    },
                    Err(err) => footer = Some(err.to_string()),
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if state.consume_dirty() || redraw {
            draw(&term, &state, footer.as_deref())?;
        }
    }

    engine_info!("Scrape studio exiting");
    Ok(())
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.enqueue(effects);
}

fn draw(term: &Term, state: &AppState, footer: Option<&str>) -> io::Result<()> {
    term.clear_screen()?;
    for line in render(&state.view()) {
        term.write_line(&line)?;
    }
    term.write_line("")?;
    if let Some(footer) = footer {
        term.write_line(&style(footer).dim().to_string())?;
    }
    term.write_str("> ")?;
    term.flush()
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
