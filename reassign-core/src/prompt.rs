//! Interactive prompts
//!
//! [`Prompter`] is the capability the workflow talks to. [`LinePrompter`] is
//! the terminal implementation: a numbered, filterable list that shows a
//! fixed number of rows, and a y/n confirmation loop.

use std::io::{self, BufRead, Write};

use crate::{Error, PullRequestInfo, Result};

/// Rows shown at once in a pick list
pub const PAGE_SIZE: usize = 12;

const TITLE_WIDTH: usize = 75;

/// User interaction the workflow needs
pub trait Prompter {
    /// Pick one PR; returns its index in `prs`
    fn pick_pr(&mut self, prs: &[PullRequestInfo]) -> Result<usize>;

    /// Pick one reviewer; returns its index in `reviewers`
    fn pick_reviewer(&mut self, reviewers: &[String]) -> Result<usize>;

    /// Ask whether `reviewer` is the right choice
    fn confirm(&mut self, reviewer: &str) -> Result<bool>;
}

/// Interpret a confirmation answer; `None` for anything unrecognised
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Right-pad `text` with spaces to `width` characters
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        format!("{}{}", text, " ".repeat(width - len))
    } else {
        text.to_string()
    }
}

/// Shorten `text` to `width` characters, ending in `...` when cut
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// One line of the PR picker
pub fn format_pr_row(pr: &PullRequestInfo) -> String {
    format!(
        "#{} {} {} {} {}",
        pad_right(&pr.number.to_string(), 7),
        pad_right(&truncate(&pr.title, TITLE_WIDTH), TITLE_WIDTH),
        pad_right(&pr.author, 15),
        pad_right(&pr.state_label(), 10),
        pad_right(&pr.updated_display(), 20),
    )
    .trim_end()
    .to_string()
}

/// Line-oriented terminal prompter
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
    page_size: usize,
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            page_size: PAGE_SIZE,
        }
    }

    /// Override the number of rows shown at once
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Consume the prompter, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn select(&mut self, label: &str, items: &[String]) -> Result<usize> {
        if items.is_empty() {
            return Err(Error::EmptyResult(format!("Nothing to select for: {}", label)));
        }

        let lowered: Vec<String> = items.iter().map(|i| i.to_lowercase()).collect();
        let mut filter = String::new();

        loop {
            let matches: Vec<usize> = (0..items.len())
                .filter(|&i| filter.is_empty() || lowered[i].contains(&filter))
                .collect();
            let view = &matches[..matches.len().min(self.page_size)];

            if filter.is_empty() {
                writeln!(self.output, "{}:", label)?;
            } else {
                writeln!(self.output, "{} (filter: {}):", label, filter)?;
            }
            for (row, &idx) in view.iter().enumerate() {
                writeln!(self.output, "{:>3}) {}", row + 1, items[idx])?;
            }
            if matches.len() > view.len() {
                writeln!(
                    self.output,
                    "     ... {} more, type to narrow the list",
                    matches.len() - view.len()
                )?;
            }
            write!(
                self.output,
                "Enter a number, text or /text to search, empty to reset, q to quit: "
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Err(Error::Cancelled(format!("{} aborted", label)));
            };

            // A leading '/' always searches, even for digits or "q"
            let (forced_search, answer) = match line.strip_prefix('/') {
                Some(rest) => (true, rest.trim()),
                None => (false, line.as_str()),
            };

            if !forced_search && answer.eq_ignore_ascii_case("q") {
                return Err(Error::Cancelled(format!("{} aborted", label)));
            }
            if answer.is_empty() {
                filter.clear();
                continue;
            }
            if let Some(n) = answer.parse::<usize>().ok().filter(|_| !forced_search) {
                if (1..=view.len()).contains(&n) {
                    return Ok(view[n - 1]);
                }
                writeln!(
                    self.output,
                    "Please enter a number between 1 and {}",
                    view.len()
                )?;
                continue;
            }

            let needle = answer.to_lowercase();
            if lowered.iter().any(|item| item.contains(&needle)) {
                filter = needle;
            } else {
                writeln!(self.output, "No matches for '{}'", answer)?;
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn pick_pr(&mut self, prs: &[PullRequestInfo]) -> Result<usize> {
        let rows: Vec<String> = prs.iter().map(format_pr_row).collect();
        self.select("Select PR", &rows)
    }

    fn pick_reviewer(&mut self, reviewers: &[String]) -> Result<usize> {
        self.select("Select reviewer", reviewers)
    }

    fn confirm(&mut self, reviewer: &str) -> Result<bool> {
        loop {
            write!(
                self.output,
                "You selected: {}. Is this correct? (y/n): ",
                reviewer
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Err(Error::Cancelled("confirmation aborted".to_string()));
            };

            match parse_confirmation(&answer) {
                Some(confirmed) => return Ok(confirmed),
                None => writeln!(self.output, "Please enter 'y' or 'n'.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: LinePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_confirmation() {
        assert_eq!(parse_confirmation("y"), Some(true));
        assert_eq!(parse_confirmation("YES"), Some(true));
        assert_eq!(parse_confirmation(" No "), Some(false));
        assert_eq!(parse_confirmation("n"), Some(false));
        assert_eq!(parse_confirmation("maybe"), None);
        assert_eq!(parse_confirmation(""), None);
    }

    #[test]
    fn test_confirm_reprompts_until_answer() {
        let mut p = prompter("maybe\nn\n");
        assert!(!p.confirm("alice").unwrap());

        let out = output(p);
        assert_eq!(out.matches("Please enter 'y' or 'n'.").count(), 1);
        assert_eq!(out.matches("You selected: alice.").count(), 2);
    }

    #[test]
    fn test_confirm_yes() {
        let mut p = prompter("Y\n");
        assert!(p.confirm("alice").unwrap());
    }

    #[test]
    fn test_confirm_eof_cancels() {
        let mut p = prompter("maybe\n");
        assert!(matches!(p.confirm("alice"), Err(Error::Cancelled(_))));
    }

    #[test]
    fn test_pick_by_number() {
        let mut p = prompter("2\n");
        let idx = p.pick_reviewer(&names(&["alice", "bob", "carol"])).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_pick_after_filter_maps_to_full_list_index() {
        let mut p = prompter("CAR\n1\n");
        let idx = p.pick_reviewer(&names(&["alice", "bob", "carol"])).unwrap();
        assert_eq!(idx, 2);
        assert!(output(p).contains("(filter: car)"));
    }

    #[test]
    fn test_pick_out_of_range_reprompts() {
        let mut p = prompter("9\n0\n1\n");
        let idx = p.pick_reviewer(&names(&["alice", "bob"])).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(
            output(p)
                .matches("Please enter a number between 1 and 2")
                .count(),
            2
        );
    }

    #[test]
    fn test_pick_unmatched_filter_keeps_view() {
        let mut p = prompter("zzz\n2\n");
        let idx = p.pick_reviewer(&names(&["alice", "bob"])).unwrap();
        assert_eq!(idx, 1);
        assert!(output(p).contains("No matches for 'zzz'"));
    }

    #[test]
    fn test_pick_fixed_height() {
        let many: Vec<String> = (1..=20).map(|i| format!("user{:02}", i)).collect();
        let mut p = prompter("13\n12\n");
        let idx = p.pick_reviewer(&many).unwrap();
        assert_eq!(idx, 11);

        let out = output(p);
        assert!(out.contains("... 8 more"));
        assert!(!out.contains("user13"));
    }

    #[test]
    fn test_slash_searches_numeric_login() {
        let mut p = prompter("/1234\n1\n");
        let idx = p
            .pick_reviewer(&names(&["alice", "bob", "dev1234"]))
            .unwrap();
        assert_eq!(idx, 2);
        assert!(output(p).contains("(filter: 1234)"));
    }

    #[test]
    fn test_slash_q_searches_instead_of_quitting() {
        let mut p = prompter("/q\n1\n");
        let idx = p.pick_reviewer(&names(&["alice", "quinn"])).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_pick_quit_and_eof_cancel() {
        let mut p = prompter("q\n");
        assert!(matches!(
            p.pick_reviewer(&names(&["alice"])),
            Err(Error::Cancelled(_))
        ));

        let mut p = prompter("");
        assert!(matches!(
            p.pick_reviewer(&names(&["alice"])),
            Err(Error::Cancelled(_))
        ));
    }

    #[test]
    fn test_pick_empty_list() {
        let mut p = prompter("1\n");
        assert!(matches!(p.pick_reviewer(&[]), Err(Error::EmptyResult(_))));
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("hello", 10), "hello     ");
        assert_eq!(pad_right("hello", 5), "hello");
        assert_eq!(pad_right("hello world", 5), "hello world");
        assert_eq!(pad_right("", 5), "     ");
        assert_eq!(pad_right("hello", 0), "hello");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijk", 8), "abcde...");
    }

    #[test]
    fn test_format_pr_row() {
        let pr = PullRequestInfo {
            number: 42,
            title: "Fix flaky test".to_string(),
            author: "octocat".to_string(),
            state: "OPEN".to_string(),
            is_draft: true,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-02T08:30:00Z".to_string(),
        };
        let row = format_pr_row(&pr);
        assert!(row.starts_with("#42      Fix flaky test"));
        assert!(row.contains("octocat"));
        assert!(row.contains("OPEN (Draft)"));
        assert!(row.ends_with("2024-01-02 08:30"));
    }
}
