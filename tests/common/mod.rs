use assert_cmd::Command;

pub fn diary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("diary").unwrap();
    cmd.env_remove("DIARY_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("DIARY_TODAY");
    cmd
}

/// Register `username` with `password` and log in, leaving the session on the dashboard
pub fn login_script(username: &str, password: &str) -> String {
    format!(
        "1\n{u}\n{p}\n2\n{u}\n{p}\n",
        u = username,
        p = password
    )
}
