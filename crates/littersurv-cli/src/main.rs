mod command;
mod plot;
mod report;
mod schema;
mod table;

fn main() -> anyhow::Result<()> {
    command::run()
}
