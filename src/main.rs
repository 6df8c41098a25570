fn main() -> anyhow::Result<()> {
    entity_tally::run()
}
