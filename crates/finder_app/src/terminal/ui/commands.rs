use finder_core::{is_known_tag, IndexVariant, Msg, QueryError, SortKey};
use thiserror::Error;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Messages for the state machine, applied in order.
    Dispatch(Vec<Msg>),
    Help,
    ListTags,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help` for a list)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a result number")]
    InvalidNumber(String),
    #[error("unknown tag `{0}` (type `tags` for the list)")]
    UnknownTag(String),
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "ingredients" | "i" => dispatch(Msg::IngredientsChanged(rest.to_string())),
        "tag" | "t" => {
            let tag = required(rest, "tag")?;
            if !is_known_tag(tag) {
                return Err(CommandError::UnknownTag(tag.to_string()));
            }
            dispatch(Msg::TagToggled(tag.to_string()))
        }
        "tags" => Command::ListTags,
        "sort" => dispatch(Msg::SortKeyChanged(
            required(rest, "sort")?.parse::<SortKey>()?,
        )),
        "index" => dispatch(Msg::IndexVariantChanged(
            required(rest, "index")?.parse::<IndexVariant>()?,
        )),
        "search" | "s" => {
            if rest.is_empty() {
                dispatch(Msg::SearchSubmitted)
            } else {
                Command::Dispatch(vec![
                    Msg::IngredientsChanged(rest.to_string()),
                    Msg::SearchSubmitted,
                ])
            }
        }
        "open" | "o" => {
            let raw = required(rest, "open")?;
            let number: usize = raw
                .parse()
                .map_err(|_| CommandError::InvalidNumber(raw.to_string()))?;
            // Results are numbered from 1 on screen.
            let index = number
                .checked_sub(1)
                .ok_or_else(|| CommandError::InvalidNumber(raw.to_string()))?;
            dispatch(Msg::RecipeSelected { index })
        }
        "back" | "b" => dispatch(Msg::BackToResults),
        "dismiss" => dispatch(Msg::NoticeDismissed),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn dispatch(msg: Msg) -> Command {
    Command::Dispatch(vec![msg])
}

fn required<'a>(rest: &'a str, verb: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(verb))
    } else {
        Ok(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Command {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn ingredients_keep_raw_text() {
        assert_eq!(
            parsed("ingredients egg,  flour , egg"),
            Command::Dispatch(vec![Msg::IngredientsChanged("egg,  flour , egg".into())])
        );
        // Bare verb clears the list.
        assert_eq!(
            parsed("i"),
            Command::Dispatch(vec![Msg::IngredientsChanged(String::new())])
        );
    }

    #[test]
    fn search_with_text_sets_ingredients_first() {
        assert_eq!(
            parsed("search tomato, basil"),
            Command::Dispatch(vec![
                Msg::IngredientsChanged("tomato, basil".into()),
                Msg::SearchSubmitted,
            ])
        );
        assert_eq!(parsed("S"), Command::Dispatch(vec![Msg::SearchSubmitted]));
    }

    #[test]
    fn open_is_one_based() {
        assert_eq!(
            parsed("open 3"),
            Command::Dispatch(vec![Msg::RecipeSelected { index: 2 }])
        );
        assert_eq!(
            parse_command("open 0"),
            Err(CommandError::InvalidNumber("0".into()))
        );
        assert_eq!(
            parse_command("open two"),
            Err(CommandError::InvalidNumber("two".into()))
        );
    }

    #[test]
    fn tags_are_checked_against_vocabulary() {
        assert_eq!(
            parsed("tag Gluten-Free"),
            Command::Dispatch(vec![Msg::TagToggled("Gluten-Free".into())])
        );
        assert_eq!(
            parse_command("tag keto"),
            Err(CommandError::UnknownTag("keto".into()))
        );
        assert_eq!(
            parse_command("tag"),
            Err(CommandError::MissingArgument("tag"))
        );
    }

    #[test]
    fn sort_and_index_parse_enum_names() {
        assert_eq!(
            parsed("sort total_time"),
            Command::Dispatch(vec![Msg::SortKeyChanged(SortKey::TotalTime)])
        );
        assert_eq!(
            parsed("index HASHMAP"),
            Command::Dispatch(vec![Msg::IndexVariantChanged(IndexVariant::HashMap)])
        );
        assert!(matches!(
            parse_command("sort rating"),
            Err(CommandError::Query(QueryError::UnknownSortKey(_)))
        ));
    }

    #[test]
    fn unknown_verbs_are_reported() {
        assert_eq!(
            parse_command("bake it"),
            Err(CommandError::Unknown("bake".into()))
        );
        assert_eq!(parsed("quit"), Command::Quit);
        assert_eq!(parsed("?"), Command::Help);
    }
}
