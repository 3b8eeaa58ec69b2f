use super::*;
use chumsky::{error::SimpleReason, prelude::*, text::whitespace};
use itertools::Itertools;

#[derive(Debug, Snafu)]
#[snafu(display("cannot parse '{input}' - {}", self.combine_errors("\n")))]
pub struct ParseError {
    input: String,
    errors: Vec<Simple<char>>,
}

impl ParseError {
    fn combine_errors(&self, separator: &str) -> String {
        self.errors
            .iter()
            .map(|err| {
                format!(
                    "{}:\n   {}",
                    err,
                    match err.reason() {
                        SimpleReason::Custom(msg) => format!("error {}", msg),
                        SimpleReason::Unexpected => "unexpected input".to_string(),
                        SimpleReason::Unclosed { span, delimiter } => {
                            format!(
                                "unclosed delimiter ({}..{}) in {}",
                                span.start, span.end, delimiter
                            )
                        }
                    }
                )
            })
            .join(separator)
    }
}

pub fn parse(input: &str) -> Result<Action, ParseError> {
    let action = program().parse(input.trim()).map_err(|errors| ParseError {
        input: input.to_string(),
        errors,
    })?;

    Ok(action)
}

fn program() -> impl Parser<char, Action, Error = Simple<char>> {
    action_list()
        .or(action_driver())
        .or(action_show())
        .or(action_reload())
        .or(action_exit())
        .then_ignore(end())
}

fn action_list() -> impl Parser<char, Action, Error = Simple<char>> {
    just("list").to(Action::List)
}

fn action_driver() -> impl Parser<char, Action, Error = Simple<char>> {
    just("driver")
        .then_ignore(whitespace().at_least(1))
        .ignore_then(driver_name())
        .map(|name| Action::Driver { name })
}

fn action_show() -> impl Parser<char, Action, Error = Simple<char>> {
    just("show")
        .then_ignore(whitespace().at_least(1))
        .ignore_then(transport_descriptor())
        .map(|transport_no| Action::Show { transport_no })
}

fn action_reload() -> impl Parser<char, Action, Error = Simple<char>> {
    just("reload").to(Action::Reload)
}

fn action_exit() -> impl Parser<char, Action, Error = Simple<char>> {
    choice((just("exit"), just("quit"))).to(Action::Exit)
}

fn transport_descriptor() -> impl Parser<char, TransportNumber, Error = Simple<char>> {
    filter(|c: &char| c.is_ascii_graphic())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(TransportNumber::from)
}

/// Driver names may contain spaces, so the rest of the line is taken as is.
fn driver_name() -> impl Parser<char, String, Error = Simple<char>> {
    take_until(end()).try_map(|(chars, _), span| {
        let name = chars.into_iter().collect::<String>();
        let name = name.trim();

        if name.is_empty() {
            Err(Simple::custom(span, "missing driver name"))
        } else {
            Ok(name.to_string())
        }
    })
}
