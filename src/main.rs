fn main() -> anyhow::Result<()> {
    seasonarr::run()
}
