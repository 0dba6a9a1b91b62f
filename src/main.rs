use std::path::Path;

mod sample_data;
mod writer;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    writer::save(Path::new(writer::DEFAULT_DESTINATION))?;
    Ok(())
}
