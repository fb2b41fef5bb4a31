use predicates::str::contains;

#[test]
fn zero_arrival_rate_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mmc-sim");
    cmd.args([
        "analyze",
        "--arrival-rate",
        "0",
        "--service-rate",
        "3",
        "--servers",
        "1",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: arrival rate must be > 0 (got 0)"));
}

#[test]
fn zero_service_rate_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mmc-sim");
    cmd.args([
        "simulate",
        "--arrival-rate",
        "2",
        "--service-rate",
        "0",
        "--servers",
        "1",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: service rate must be > 0 (got 0)"));
}

#[test]
fn zero_servers_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mmc-sim");
    cmd.args([
        "analyze",
        "--arrival-rate",
        "2",
        "--service-rate",
        "3",
        "--servers",
        "0",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: server count must be > 0"));
}

#[test]
fn missing_parameter_names_the_flag() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mmc-sim");
    cmd.args(["analyze", "--arrival-rate", "2"]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: missing required parameter 'service-rate'"));
}

#[test]
fn states_refuses_unstable_system() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mmc-sim");
    cmd.args([
        "states",
        "--arrival-rate",
        "10",
        "--service-rate",
        "2",
        "--servers",
        "3",
    ]);
    cmd.assert().failure().stderr(contains(
        "Error: system is unstable (rho = 1.6667 >= 1): no stationary distribution exists",
    ));
}

#[test]
fn negative_horizon_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mmc-sim");
    cmd.args([
        "simulate",
        "--arrival-rate",
        "2",
        "--service-rate",
        "3",
        "--servers",
        "1",
        "--horizon",
        "0",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: simulation horizon must be > 0 (got 0)"));
}
