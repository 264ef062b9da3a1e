use crate::model::Strategy;

/// One line of operator input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Predict,
    ShowStats,
    ShowDigits,
    ShowMarkets,
    SetStrategy(Strategy),
    SetSymbol(String),
    Help,
    Quit,
}

/// Parse one line of operator input. `None` means unrecognized; extra
/// trailing tokens make a line unrecognized rather than silently ignored.
pub fn parse_command(line: &str) -> Option<AppCommand> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?.to_ascii_lowercase();
    let arg = parts.next();
    if parts.next().is_some() {
        return None;
    }
    match (head.as_str(), arg) {
        ("p" | "predict", None) => Some(AppCommand::Predict),
        ("s" | "stats", None) => Some(AppCommand::ShowStats),
        ("d" | "digits", None) => Some(AppCommand::ShowDigits),
        ("m" | "markets", None) => Some(AppCommand::ShowMarkets),
        ("h" | "help" | "?", None) => Some(AppCommand::Help),
        ("q" | "quit" | "exit", None) => Some(AppCommand::Quit),
        ("st" | "strategy", Some(id)) => Strategy::parse(id).map(AppCommand::SetStrategy),
        ("sym" | "symbol", Some(symbol)) => {
            Some(AppCommand::SetSymbol(symbol.to_ascii_uppercase()))
        }
        _ => None,
    }
}
