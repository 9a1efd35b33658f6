//! Prompt loop
//!
//! Lines come from a dedicated stdin thread through a channel, so an
//! interrupt can be observed while the prompt is waiting. A command that is
//! already executing always runs to completion.
//!
//! The interrupt handler is installed before the session starts. A Ctrl-C
//! during startup is held until the first prompt, where it ends the session
//! through the normal shutdown.

use crate::controller::{Controller, ExitMode, Flow};
use song_core::{HostControl, MixerService, PlayerService};
use std::future::Future;
use std::io::{self, BufRead, Write};
use std::thread;
use tokio::sync::mpsc;

/// Lines buffered between the stdin thread and the loop
const LINE_BUFFER: usize = 16;

/// Start a thread forwarding stdin lines
///
/// The channel closes on EOF. A read error is forwarded and ends the thread.
pub fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<io::Result<String>>> {
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })?;

    Ok(rx)
}

/// Install the Ctrl-C handler now and return a future resolving on the
/// first interrupt, including one delivered before it is first polled
#[cfg(unix)]
pub fn listen_for_interrupt() -> io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupts = signal(SignalKind::interrupt())?;
    Ok(async move {
        if interrupts.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    })
}

/// Install the Ctrl-C handler and return a future resolving on interrupt
#[cfg(not(unix))]
pub fn listen_for_interrupt() -> io::Result<impl Future<Output = ()>> {
    use tokio::signal::windows::ctrl_c;

    let mut interrupts = ctrl_c()?;
    Ok(async move {
        if interrupts.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    })
}

/// Run the prompt loop until a terminal command, EOF, an interrupt or an
/// input error, then shut the controller down
pub async fn run<P, M, H, W, F>(
    controller: &mut Controller<P, M, H, W>,
    lines: &mut mpsc::Receiver<io::Result<String>>,
    interrupt: F,
) -> ExitMode
where
    P: PlayerService,
    M: MixerService,
    H: HostControl,
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(interrupt);

    let exit = loop {
        if let Err(e) = controller.prompt() {
            tracing::error!("an unhandled error occurred: {}", e);
            break ExitMode::StopPlayback;
        }

        let line = tokio::select! {
            biased;

            () = &mut interrupt => {
                tracing::info!("keyboard interrupt received");
                break ExitMode::StopPlayback;
            }
            line = lines.recv() => line,
        };

        let line = match line {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                tracing::error!("an unhandled error occurred: {}", e);
                break ExitMode::StopPlayback;
            }
            None => {
                tracing::info!("input closed");
                break ExitMode::StopPlayback;
            }
        };

        match controller.handle_line(&line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit(exit)) => break exit,
            Err(e) => {
                tracing::error!("an unhandled error occurred: {}", e);
                break ExitMode::StopPlayback;
            }
        }
    };

    controller.shutdown(exit);
    exit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn interrupt_listener_installs_inside_runtime() {
        assert!(listen_for_interrupt().is_ok());
    }
}
