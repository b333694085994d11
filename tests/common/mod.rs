use assert_cmd::Command;

pub fn detag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("detag").unwrap();
    cmd.env_remove("DETAG_ROOT");
    cmd.env_remove("DETAG_LOCALE");
    cmd.env_remove("DETAG_LOG");
    cmd
}
