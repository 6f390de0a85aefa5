use test_support::{cmd_bin, init_fixture_repo, short_id, BASE_TAG, BINARY_FILE, COMPARE_TAG};

fn ci_stdout(extra: &[&str]) -> (String, String) {
  let repo = init_fixture_repo();
  let path = repo.path();
  let mut args = vec!["--repo", path.to_str().unwrap(), "--reporter", "ci", COMPARE_TAG, BASE_TAG];
  args.extend_from_slice(extra);
  let out = cmd_bin("lfs-check").args(&args).output().unwrap();
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  let added = short_id(path, &format!("{}~2", COMPARE_TAG));
  (String::from_utf8(out.stdout).unwrap(), added)
}

#[test]
fn one_binary_commit_emits_registration_finding_parameter_and_problem() {
  let (stdout, added) = ci_stdout(&[]);
  let lines: Vec<&str> = stdout.lines().collect();
  assert_eq!(lines.len(), 4, "{stdout}");

  assert_eq!(stdout.matches("##teamcity[inspectionType ").count(), 1);
  assert!(lines[0].starts_with("##teamcity[inspectionType id='lfs-check.binary-file'"));

  let finding = format!(
    "##teamcity[inspection typeId='lfs-check.binary-file' message='Binary file {} was committed directly in {}' file='{}' SEVERITY='ERROR']",
    BINARY_FILE, added, BINARY_FILE
  );
  assert_eq!(lines[1], finding);
  assert_eq!(lines[2], "##teamcity[setParameter name='env.LFS_CHECK_BINARY_FILES' value='true']");
  assert!(lines[3].starts_with("##teamcity[buildProblem "));
}

#[test]
fn suppressing_build_problem_keeps_other_messages() {
  let (stdout, _) = ci_stdout(&["--no-build-problem"]);
  assert_eq!(stdout.lines().count(), 3, "{stdout}");
  assert_eq!(stdout.matches("##teamcity[inspectionType ").count(), 1);
  assert_eq!(stdout.matches("##teamcity[inspection typeId").count(), 1);
  assert_eq!(stdout.matches("##teamcity[setParameter ").count(), 1);
  assert!(!stdout.contains("buildProblem"));
}

#[test]
fn severity_flag_is_carried_into_findings() {
  let (stdout, _) = ci_stdout(&["--severity", "warning"]);
  assert!(stdout.contains("SEVERITY='WARNING'"));
}
