fn main() -> anyhow::Result<()> {
    nspack::run()
}
