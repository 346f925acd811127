//! # Placeholder Substitution Unit Tests / 占位符替换单元测试
//!
//! Tests for `core::placeholder`: every recognized token is replaced with the
//! value taken from the run configuration.
//!
//! 测试 `core::placeholder`：每个可识别的标记都会被替换为运行配置中的值。

mod common;

use common::sample_config;
use e2e_runner::core::placeholder::{substitute, Placeholder};

#[test]
fn test_host_is_inserted_verbatim() {
    let out = substitute("nxc smb TARGET_HOST", &sample_config());
    assert_eq!(out, "nxc smb 10.0.0.1");
}

#[test]
fn test_credentials_are_double_quoted() {
    let out = substitute("nxc smb TARGET_HOST -u LOGIN_USERNAME -p LOGIN_PASSWORD", &sample_config());
    assert_eq!(out, "nxc smb 10.0.0.1 -u \"admin\" -p \"Passw0rd!\"");
}

#[test]
fn test_kerberos_enabled_emits_flag() {
    let mut config = sample_config();
    config.kerberos = true;
    let out = substitute("nxc smb TARGET_HOST KERBEROS --shares", &config);
    assert_eq!(out, "nxc smb 10.0.0.1 -k --shares");
}

#[test]
fn test_kerberos_disabled_removes_token_and_its_space() {
    let out = substitute("nxc smb TARGET_HOST KERBEROS --shares", &sample_config());
    // The space before the token stays; only "KERBEROS " goes away.
    assert_eq!(out, "nxc smb 10.0.0.1 --shares");
}

#[test]
fn test_kerberos_without_trailing_space_is_not_a_token() {
    let out = substitute("nxc smb TARGET_HOST KERBEROS", &sample_config());
    assert_eq!(out, "nxc smb 10.0.0.1 KERBEROS");
}

#[test]
fn test_list_files_are_substituted() {
    let out = substitute("nxc smb TARGET_HOST -u TEST_USER_FILE -p TEST_PASSWORD_FILE", &sample_config());
    assert_eq!(
        out,
        "nxc smb 10.0.0.1 -u /data/test_users.txt -p /data/test_passwords.txt"
    );
}

#[test]
fn test_dns_placeholder_with_and_without_server() {
    let mut config = sample_config();
    assert_eq!(substitute("nxc smb TARGET_HOST {DNS}", &config), "nxc smb 10.0.0.1 ");

    config.dns_server = Some("10.0.0.53".to_string());
    assert_eq!(
        substitute("nxc smb TARGET_HOST {DNS}", &config),
        "nxc smb 10.0.0.1 --dns-server 10.0.0.53"
    );
}

#[test]
fn test_wrapper_prefix() {
    let mut config = sample_config();
    config.use_wrapper = true;
    let out = substitute("netexec ldap TARGET_HOST", &config);
    assert_eq!(out, "poetry run netexec ldap 10.0.0.1");
}

#[test]
fn test_no_recognized_token_survives() {
    let mut config = sample_config();
    config.kerberos = true;
    config.dns_server = Some("ns".to_string());
    let line = Placeholder::ALL
        .iter()
        .map(|p| format!("x{}", p.token()))
        .collect::<String>();

    let out = substitute(&line, &config);
    for placeholder in Placeholder::ALL {
        assert!(
            !out.contains(placeholder.token()),
            "{:?} left in {out}",
            placeholder
        );
    }
}

#[test]
fn test_unrecognized_tokens_are_left_alone() {
    let out = substitute("nxc smb TARGET_HOST --local-auth OTHER_TOKEN", &sample_config());
    assert_eq!(out, "nxc smb 10.0.0.1 --local-auth OTHER_TOKEN");
}

#[test]
fn test_inserted_values_are_not_rescanned() {
    let mut config = sample_config();
    config.username = "TARGET_HOST".to_string();
    config.target = "LOGIN_PASSWORD".to_string();
    let out = substitute("nxc smb TARGET_HOST -u LOGIN_USERNAME", &config);
    assert_eq!(out, "nxc smb LOGIN_PASSWORD -u \"TARGET_HOST\"");
}
