//! # Line Selector / 行选择器
//!
//! Narrows a catalog down to the lines that should run, by 1-based line
//! number and/or by protocol tag (the second whitespace-delimited token).
//!
//! 按基于 1 的行号和/或协议标签（第二个以空白分隔的标记）
//! 将命令目录缩小到需要运行的行。

use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Errors raised while parsing line-number selections.
/// These abort the run before any command executes.
///
/// 解析行号选择时产生的错误。它们会在任何命令执行之前中止运行。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid line number '{0}'")]
    InvalidNumber(String),

    #[error("malformed line range '{0}', expected START-END")]
    MalformedRange(String),

    #[error("line range '{token}' is reversed: {start} is greater than {end}")]
    ReversedRange {
        token: String,
        start: usize,
        end: usize,
    },
}

/// The combined line-number / protocol filter.
/// `None` on either axis means no filtering on that axis.
///
/// 行号与协议的组合过滤器。任一维度为 `None` 表示该维度不过滤。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSpec {
    pub line_numbers: Option<BTreeSet<usize>>,
    pub protocols: Option<HashSet<String>>,
}

impl SelectionSpec {
    /// Builds a selection from raw command-line tokens.
    ///
    /// Every argument may hold several whitespace-separated items, each
    /// either `N` or `START-END`. Empty inputs leave the axis unfiltered.
    pub fn from_tokens<L, P>(line_tokens: L, protocols: P) -> Result<Self, SelectionError>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let line_numbers = parse_line_numbers(line_tokens)?;
        let protocols: HashSet<String> = protocols.into_iter().map(Into::into).collect();

        Ok(Self {
            line_numbers: (!line_numbers.is_empty()).then_some(line_numbers),
            protocols: (!protocols.is_empty()).then_some(protocols),
        })
    }

    fn keeps_line_number(&self, number: usize) -> bool {
        self.line_numbers
            .as_ref()
            .is_none_or(|numbers| numbers.contains(&number))
    }

    fn keeps_protocol(&self, line: &str) -> bool {
        match &self.protocols {
            None => true,
            Some(protocols) => protocol_of(line).is_some_and(|tag| protocols.contains(tag)),
        }
    }
}

/// Expands line-number tokens into a de-duplicated set.
///
/// 将行号标记展开为去重后的集合。
///
/// ```
/// use e2e_runner::core::selector::parse_line_numbers;
///
/// let lines = parse_line_numbers(["2-4", "3 7"]).unwrap();
/// assert_eq!(lines.into_iter().collect::<Vec<_>>(), vec![2, 3, 4, 7]);
/// ```
pub fn parse_line_numbers<I>(tokens: I) -> Result<BTreeSet<usize>, SelectionError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut numbers = BTreeSet::new();
    for token in tokens {
        for item in token.as_ref().split_whitespace() {
            match item.split_once('-') {
                Some((start, end)) => {
                    let (start, end) = parse_range(item, start, end)?;
                    numbers.extend(start..=end);
                }
                None => {
                    let number = item
                        .parse::<usize>()
                        .map_err(|_| SelectionError::InvalidNumber(item.to_string()))?;
                    numbers.insert(number);
                }
            }
        }
    }
    Ok(numbers)
}

fn parse_range(token: &str, start: &str, end: &str) -> Result<(usize, usize), SelectionError> {
    let bound = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| SelectionError::MalformedRange(token.to_string()))
    };
    let (start, end) = (bound(start)?, bound(end)?);
    if start > end {
        return Err(SelectionError::ReversedRange {
            token: token.to_string(),
            start,
            end,
        });
    }
    Ok((start, end))
}

/// Returns the protocol tag of a catalog line: its second whitespace token.
pub fn protocol_of(line: &str) -> Option<&str> {
    line.split_whitespace().nth(1)
}

/// A catalog line is a comment when its first character is `#`.
pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Selects the catalog lines to run, in catalog order.
///
/// Comments never survive, even when numbered explicitly. Line numbers past
/// the end of the catalog match nothing.
///
/// 按目录顺序选择要运行的行。注释行永远不会被选中，即使显式指定了行号。
/// 超出目录末尾的行号不匹配任何行。
pub fn select<'a, S>(catalog: &'a [S], spec: &SelectionSpec) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    catalog
        .iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line.as_ref()))
        .filter(|&(number, _)| spec.keeps_line_number(number))
        .map(|(_, line)| line)
        .filter(|line| !is_comment(line))
        .filter(|line| spec.keeps_protocol(line))
        .collect()
}
