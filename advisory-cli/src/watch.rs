use crate::client::FetchError;
use crate::controller::{DashboardData, PageController, RequestToken};
use crate::dashboard::render_page;
use chrono::Utc;
use log::debug;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

const CHANNEL_DEPTH: usize = 8;
const PROMPT: &str = "[r] refresh  [n] next  [p] prev  [1-9] select specialist  [q] quit";

type Completion = (RequestToken, Result<DashboardData, FetchError>);

#[derive(Debug, Clone, PartialEq, Eq)]
enum WatchCommand {
    Refresh,
    Next,
    Prev,
    /// Zero-based.
    Select(usize),
    Quit,
}

fn parse_command(line: &str) -> Option<WatchCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "r" | "refresh" | "retry" => Some(WatchCommand::Refresh),
        "n" | "next" => Some(WatchCommand::Next),
        "p" | "prev" => Some(WatchCommand::Prev),
        "q" | "quit" | "exit" => Some(WatchCommand::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(WatchCommand::Select),
    }
}

fn spawn_refresh(controller: &mut PageController, tx: &mpsc::Sender<Completion>) {
    let token = controller.begin_refresh();
    let loader = controller.loader();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = loader.load().await;
        if tx.send((token, outcome)).await.is_err() {
            debug!("[watch] dropping refresh #{}: watcher gone", token.seq());
        }
    });
}

fn redraw<W: Write>(out: &mut W, controller: &PageController, color: bool) -> std::io::Result<()> {
    let page = render_page(controller.state(), controller.carousel(), Utc::now(), color);
    writeln!(out, "{page}")?;
    writeln!(out, "{PROMPT}")?;
    out.flush()
}

/// Interactive dashboard. Refreshes run in the background so a new refresh
/// can be issued while one is still in flight; the controller drops the
/// superseded result.
pub async fn run_watch<R, W>(
    mut controller: PageController,
    input: R,
    out: &mut W,
    color: bool,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (tx, mut rx) = mpsc::channel::<Completion>(CHANNEL_DEPTH);
    let mut lines = input.lines();

    spawn_refresh(&mut controller, &tx);
    redraw(out, &controller, color)?;

    loop {
        tokio::select! {
            Some((token, outcome)) = rx.recv() => {
                if controller.commit(token, outcome) {
                    redraw(out, &controller, color)?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Some(WatchCommand::Quit) => break,
                    Some(WatchCommand::Refresh) => spawn_refresh(&mut controller, &tx),
                    Some(WatchCommand::Next) => {
                        controller.carousel_mut().next();
                    }
                    Some(WatchCommand::Prev) => {
                        controller.carousel_mut().prev();
                    }
                    Some(WatchCommand::Select(idx)) => {
                        if !controller.carousel_mut().select(idx) {
                            writeln!(out, "No specialist #{}", idx + 1)?;
                            continue;
                        }
                    }
                    None => {
                        writeln!(out, "Unknown command: {}", line.trim())?;
                        continue;
                    }
                }
                redraw(out, &controller, color)?;
            }
        }
    }
    Ok(())
}
