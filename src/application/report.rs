use colored::Colorize;
use memfs::script::{Outcome, Step};

/// Plain text shown under a step's header, `None` when there is nothing to show.
pub fn outcome_text(step: &Step) -> Option<String> {
    match &step.result {
        Ok(Outcome::Listing(names)) => Some(names.join(" ")),
        Ok(Outcome::Content(content)) => Some(content.clone()),
        Ok(Outcome::Done) => None,
        Err(error) => Some(format!("error: {error}")),
    }
}

pub fn print_step(step: &Step) {
    println!("{}", format!("$ {}", step.operation).bold());
    if let Some(text) = outcome_text(step) {
        if step.is_failure() {
            println!("{}", text.red());
        } else {
            println!("{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memfs::FilesystemError;
    use memfs::script::Operation;

    fn step(operation: &Operation, result: Result<Outcome, FilesystemError>) -> Step<'_> {
        Step {
            index: 0,
            operation,
            result,
        }
    }

    #[test]
    fn listings_are_space_separated() {
        let ls = Operation::Ls { path: "/".into() };
        let listing = Outcome::Listing(vec!["a".into(), "b.txt".into()]);
        assert_eq!(outcome_text(&step(&ls, Ok(listing))), Some("a b.txt".into()));
    }

    #[test]
    fn content_is_shown_verbatim() {
        let read = Operation::Read { path: "/f".into() };
        let content = Outcome::Content("line one\nline two".into());
        assert_eq!(
            outcome_text(&step(&read, Ok(content))),
            Some("line one\nline two".into())
        );
    }

    #[test]
    fn completed_mutations_show_nothing() {
        let mkdir = Operation::Mkdir { path: "/a".into() };
        assert_eq!(outcome_text(&step(&mkdir, Ok(Outcome::Done))), None);
    }

    #[test]
    fn failures_show_the_error() {
        let read = Operation::Read { path: "/a".into() };
        let error = FilesystemError::NotAFile { path: "/a".into() };
        assert_eq!(
            outcome_text(&step(&read, Err(error))),
            Some("error: Not a file: /a".into())
        );
    }
}
