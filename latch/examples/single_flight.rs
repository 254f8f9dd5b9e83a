use std::fs::File;
use std::time::Duration;

use latch::prelude::*;
use latch::wakeup;
use simplelog::{Config, LevelFilter, WriteLogger};

fn report(label: &str, actions: &[&AsyncAction]) {
    println!("{label}");
    for action in actions {
        println!(
            "  {:<8} running={:<5} loading={:<5} disabled={}",
            action.id().as_str(),
            action.is_running(),
            action.is_visibly_loading(),
            action.is_disabled()
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("single_flight.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let (sender, mut wakeups) = wakeup::channel();
    let scope = ActionScope::new().with_wakeup(sender);

    let save = scope.action("save", ExecutionPolicy::new());
    let save_toolbar = scope.action("save", ExecutionPolicy::new());
    let search = scope.action("search", ExecutionPolicy::new().allow_concurrent().cancel_running());

    let run = save.activate(|_cancel| async {
        tokio::time::sleep(Duration::from_millis(200)).await;
    })?;
    report("save started", &[&save, &save_toolbar, &search]);

    let again = save_toolbar.activate(|_cancel| async {})?;
    println!("second save while running: started={}", again.is_started());

    // Each keystroke supersedes the previous search
    for query in ["r", "ru", "rus", "rust"] {
        search.activate(move |cancel| async move {
            tokio::select! {
                _ = cancel.cancelled() => log::debug!("search '{query}' superseded"),
                _ = tokio::time::sleep(Duration::from_millis(50)) => {
                    log::debug!("search '{query}' finished")
                }
            }
        })?;
    }

    if let Some(handle) = run.into_handle() {
        handle.await?;
    }
    tokio::time::sleep(Duration::from_millis(100)).await;

    println!("wakeups delivered: {}", wakeups.drain());
    report("all done", &[&save, &save_toolbar, &search]);
    Ok(())
}
