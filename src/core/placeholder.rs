//! # Placeholder Substitution / 占位符替换
//!
//! Rewrites one template line into one executable command string.
//! The recognized tokens form a closed set; each kind maps to exactly one
//! value derived from the [`RunConfig`].
//!
//! 将一行模板改写为一条可执行的命令字符串。
//! 可识别的标记是一个封闭集合；每种类型恰好对应一个从 [`RunConfig`] 派生的值。

use std::borrow::Cow;

use crate::core::config::RunConfig;

/// Wrapper invocation prepended when `use_wrapper` is set.
pub const WRAPPER_PREFIX: &str = "poetry run";

/// Flag emitted in place of the kerberos token when kerberos auth is enabled.
pub const KERBEROS_FLAG: &str = "-k ";

/// The kinds of placeholder a template line may contain.
/// 模板行中可能包含的占位符类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    TargetHost,
    LoginUsername,
    LoginPassword,
    /// Matches the token together with its trailing space.
    Kerberos,
    TestUserFile,
    TestPasswordFile,
    Dns,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::TargetHost,
        Placeholder::LoginUsername,
        Placeholder::LoginPassword,
        Placeholder::Kerberos,
        Placeholder::TestUserFile,
        Placeholder::TestPasswordFile,
        Placeholder::Dns,
    ];

    /// The literal marker searched for in template lines.
    /// 在模板行中搜索的字面标记。
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::TargetHost => "TARGET_HOST",
            Placeholder::LoginUsername => "LOGIN_USERNAME",
            Placeholder::LoginPassword => "LOGIN_PASSWORD",
            Placeholder::Kerberos => "KERBEROS ",
            Placeholder::TestUserFile => "TEST_USER_FILE",
            Placeholder::TestPasswordFile => "TEST_PASSWORD_FILE",
            Placeholder::Dns => "{DNS}",
        }
    }

    /// The text that replaces this placeholder under `config`.
    /// 在给定 `config` 下替换此占位符的文本。
    pub fn replacement(self, config: &RunConfig) -> Cow<'_, str> {
        match self {
            Placeholder::TargetHost => Cow::Borrowed(config.target.as_str()),
            Placeholder::LoginUsername => Cow::Owned(format!("\"{}\"", config.username)),
            Placeholder::LoginPassword => Cow::Owned(format!("\"{}\"", config.password)),
            Placeholder::Kerberos if config.kerberos => Cow::Borrowed(KERBEROS_FLAG),
            Placeholder::Kerberos => Cow::Borrowed(""),
            Placeholder::TestUserFile => config.test_user_file.to_string_lossy(),
            Placeholder::TestPasswordFile => config.test_password_file.to_string_lossy(),
            Placeholder::Dns => match &config.dns_server {
                Some(server) => Cow::Owned(format!("--dns-server {server}")),
                None => Cow::Borrowed(""),
            },
        }
    }

    /// Returns the placeholder whose token starts `text`, if any.
    fn match_prefix(text: &str) -> Option<Placeholder> {
        Self::ALL
            .into_iter()
            .find(|placeholder| text.starts_with(placeholder.token()))
    }
}

/// Substitutes every recognized placeholder in `line` and applies the
/// optional wrapper prefix.
///
/// The line is scanned once from left to right. Replacement values are
/// appended to the output and never scanned again, so a username that happens
/// to contain `TARGET_HOST` is inserted verbatim.
///
/// 替换 `line` 中所有可识别的占位符，并应用可选的包装前缀。
///
/// 行只会从左到右扫描一次。替换值被追加到输出中且不会再次扫描，
/// 因此恰好包含 `TARGET_HOST` 的用户名会被原样插入。
pub fn substitute(line: &str, config: &RunConfig) -> String {
    let mut command = String::with_capacity(line.len() + 32);
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if let Some(placeholder) = Placeholder::match_prefix(rest) {
            command.push_str(&placeholder.replacement(config));
            rest = &rest[placeholder.token().len()..];
        } else {
            command.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    if config.use_wrapper {
        format!("{WRAPPER_PREFIX} {command}")
    } else {
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> RunConfig {
        RunConfig {
            target: "10.0.0.1".to_string(),
            username: "admin".to_string(),
            password: "p@ss".to_string(),
            kerberos: false,
            dns_server: None,
            test_user_file: PathBuf::from("data/test_users.txt"),
            test_password_file: PathBuf::from("data/test_passwords.txt"),
            use_wrapper: false,
        }
    }

    #[test]
    fn tokens_are_distinct_and_non_empty() {
        for a in Placeholder::ALL {
            assert!(!a.token().is_empty());
            for b in Placeholder::ALL {
                if a != b {
                    assert!(!a.token().starts_with(b.token()));
                }
            }
        }
    }

    #[test]
    fn repeated_tokens_are_all_replaced() {
        let out = substitute("ping TARGET_HOST TARGET_HOST", &config());
        assert_eq!(out, "ping 10.0.0.1 10.0.0.1");
    }

    #[test]
    fn multibyte_text_survives_scan() {
        let out = substitute("echo héllo TARGET_HOST ✔", &config());
        assert_eq!(out, "echo héllo 10.0.0.1 ✔");
    }
}
