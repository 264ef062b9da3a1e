use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};

use digit_pulse::analysis::{DigitEngine, DigitHeat, DigitStats};
use digit_pulse::config::Config;
use digit_pulse::deriv::DerivWsClient;
use digit_pulse::event::{AppEvent, FeedSubscription, WsConnectionStatus};
use digit_pulse::input::{parse_command, AppCommand};
use digit_pulse::market_catalog::{self, MarketCategory};
use digit_pulse::model::{Strategy, Tick};

#[tokio::main]
async fn main() -> Result<()> {
    // Install rustls crypto provider (required by rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load config
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // Init tracing (log to file so stdout stays a clean ticker tape)
    let log_file = std::fs::File::create("digit-pulse.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        symbol = %config.deriv.symbol,
        ws_url = %config.deriv.ws_url,
        app_id = config.deriv.app_id,
        strategy = %config.analysis.strategy.id(),
        "Starting digit-pulse"
    );

    // Channels
    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(256);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let (subscription_tx, subscription_rx) = watch::channel(FeedSubscription {
        generation: 0,
        symbol: config.deriv.symbol.clone(),
    });

    // Spawn the feed task
    let client = DerivWsClient::new(&config.deriv.ws_url, config.deriv.app_id)?;
    let feed_event_tx = event_tx.clone();
    let feed_shutdown = shutdown_rx.clone();
    tokio::spawn(async move {
        if let Err(e) = client
            .connect_and_run(feed_event_tx, subscription_rx, feed_shutdown)
            .await
        {
            tracing::error!(error = %e, "Feed task failed");
        }
    });

    // Ctrl+C handler
    let ctrl_c_shutdown = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Ctrl+C received");
        let _ = ctrl_c_shutdown.send(true);
    });

    let mut engine = DigitEngine::new(
        &config.deriv.symbol,
        config.analysis.strategy,
        config.analysis.max_ticks,
        config.analysis.default_pip_size,
    );

    print_banner(&engine);

    let mut generation: u64 = 0;
    let mut stdin_lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut shutdown = shutdown_rx;

    loop {
        tokio::select! {
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                handle_event(&mut engine, generation, event);
            }
            line = stdin_lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        match parse_command(&line) {
                            Some(command) => handle_command(
                                &mut engine,
                                command,
                                &mut generation,
                                &subscription_tx,
                                &shutdown_tx,
                            ),
                            None => println!("Unknown command; type 'help' for the list."),
                        }
                    }
                    Ok(None) => {
                        tracing::info!("stdin closed, running feed-only");
                        stdin_open = false;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read stdin");
                        stdin_open = false;
                    }
                }
            }
            _ = shutdown.changed() => {
                break;
            }
        }
    }

    tracing::info!("digit-pulse stopped");
    Ok(())
}

fn handle_event(engine: &mut DigitEngine, generation: u64, event: AppEvent) {
    match event {
        AppEvent::FeedTick(feed_tick) => {
            // A tick from an earlier subscription would re-seed the window
            // that the symbol switch just cleared.
            if feed_tick.generation != generation {
                tracing::debug!(symbol = %feed_tick.symbol, "Dropping stale tick");
                return;
            }
            let tick = engine.ingest(feed_tick.quote, feed_tick.epoch, feed_tick.pip_size);
            print_tick_line(engine, &tick);
        }
        AppEvent::WsStatus(status) => match status {
            WsConnectionStatus::Connected => println!("[feed] connected"),
            WsConnectionStatus::Disconnected => println!("[feed] disconnected"),
            WsConnectionStatus::Reconnecting { attempt, delay_ms } => {
                println!("[feed] reconnecting (attempt {attempt}, retry in {delay_ms}ms)");
            }
        },
        AppEvent::FeedError { code, message } => {
            tracing::warn!(code = %code, message = %message, "Feed reported an error");
            println!("[feed] {code}: {message}");
        }
        AppEvent::LogMessage(message) => {
            tracing::info!("{message}");
        }
    }
}

fn handle_command(
    engine: &mut DigitEngine,
    command: AppCommand,
    generation: &mut u64,
    subscription_tx: &watch::Sender<FeedSubscription>,
    shutdown_tx: &watch::Sender<bool>,
) {
    match command {
        AppCommand::Predict => match engine.predict() {
            Some(prediction) => println!(
                "prediction [{}]: {}  confidence {:.1}%",
                engine.strategy(),
                prediction.call,
                prediction.confidence
            ),
            None => println!("prediction: no ticks yet"),
        },
        AppCommand::ShowStats => print_stats(engine),
        AppCommand::ShowDigits => print_histogram(engine),
        AppCommand::ShowMarkets => print_markets(),
        AppCommand::SetStrategy(strategy) => {
            engine.set_strategy(strategy);
            tracing::info!(strategy = %strategy.id(), "Strategy switched");
            println!("strategy -> {strategy}");
            print_stats(engine);
        }
        AppCommand::SetSymbol(symbol) => {
            if !engine.set_symbol(&symbol) {
                println!("already tracking {symbol}");
                return;
            }
            *generation += 1;
            let _ = subscription_tx.send(FeedSubscription {
                generation: *generation,
                symbol: symbol.clone(),
            });
            tracing::info!(symbol = %symbol, generation = *generation, "Symbol switched");
            match market_catalog::find_symbol(&symbol) {
                Some(asset) => println!("symbol -> {} ({}); window cleared", symbol, asset.name),
                None => println!("symbol -> {symbol} (not in catalog); window cleared"),
            }
        }
        AppCommand::Help => print_help(),
        AppCommand::Quit => {
            tracing::info!("User quit");
            let _ = shutdown_tx.send(true);
        }
    }
}

fn print_banner(engine: &DigitEngine) {
    let name = market_catalog::find_symbol(engine.symbol())
        .map(|asset| asset.name)
        .unwrap_or("unlisted");
    println!(
        "digit-pulse | {} ({}) | strategy {} | window {}",
        engine.symbol(),
        name,
        engine.strategy(),
        engine.window().capacity()
    );
    println!("type 'help' for commands");
}

fn print_tick_line(engine: &DigitEngine, tick: &Tick) {
    let clock = chrono::DateTime::from_timestamp(tick.epoch as i64, 0)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| tick.epoch.to_string());
    println!(
        "{} {} {} digit {}  [{}/{}]  {}",
        clock,
        engine.symbol(),
        tick.quote,
        tick.digit,
        engine.window().len(),
        engine.window().capacity(),
        stats_summary(&engine.stats())
    );
}

fn stats_summary(stats: &DigitStats) -> String {
    match stats {
        DigitStats::Empty => "collecting...".to_string(),
        DigitStats::EvenOdd { even_pct, odd_pct } => {
            format!("even {even_pct:.1}% / odd {odd_pct:.1}%")
        }
        DigitStats::MatchesDiffers { target, match_pct, differ_pct } => {
            format!("match({target}) {match_pct:.1}% / differ {differ_pct:.1}%")
        }
        DigitStats::OverUnder { over_pct, under_pct } => {
            format!("over 4: {over_pct:.1}% / under 5: {under_pct:.1}%")
        }
    }
}

fn print_stats(engine: &DigitEngine) {
    println!(
        "stats [{}] over {} ticks: {}",
        engine.strategy(),
        engine.window().len(),
        stats_summary(&engine.stats())
    );
}

fn print_histogram(engine: &DigitEngine) {
    let histogram = engine.histogram();
    if histogram.is_empty() {
        println!("digits: no ticks yet");
        return;
    }
    let cells: Vec<String> = (0u8..10)
        .map(|digit| {
            let marker = match histogram.heat(digit) {
                DigitHeat::Hot => "*",
                DigitHeat::Cold => ".",
                DigitHeat::Neutral => " ",
            };
            format!("{digit}:{:>2}%{marker}", histogram.percent(digit))
        })
        .collect();
    println!("digits over {} ticks: {}", histogram.total(), cells.join(" "));
    println!("hot {:?}  cold {:?}", histogram.hot_digits(), histogram.cold_digits());
}

fn print_markets() {
    for category in MarketCategory::ALL {
        println!("{}:", category.label());
        for asset in category.assets() {
            println!("  {:<10} {}", asset.symbol, asset.name);
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  p | predict           run the active strategy's prediction");
    println!("  s | stats             show the stats breakdown");
    println!("  d | digits            show the digit frequency grid");
    println!("  m | markets           list subscribable symbols");
    println!("  st | strategy <id>    switch strategy");
    println!("  sym | symbol <SYM>    switch symbol (clears the window)");
    println!("  q | quit              exit");
    print!("strategies:");
    for strategy in Strategy::ALL {
        print!(" {}", strategy.id());
    }
    println!();
}
