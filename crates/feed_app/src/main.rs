mod host;

fn main() -> anyhow::Result<()> {
    host::run_app(host::HostConfig::default())
}
