fn main() -> anyhow::Result<()> {
    search_select::cli::run()
}
