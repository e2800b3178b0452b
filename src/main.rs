use std::path::Path;

use anyhow::{Context, Result};
use simple_logger::SimpleLogger;

use rawpng::{DUMP_HEIGHT, DUMP_STEMS, DUMP_WIDTH, convert_dump};

fn main() -> Result<()> {
    SimpleLogger::new().init()?;

    for stem in DUMP_STEMS {
        let input = Path::new(stem).with_extension("txt");
        convert_dump(&input, DUMP_WIDTH, DUMP_HEIGHT)
            .with_context(|| format!("could not convert {}", input.display()))?;
    }

    Ok(())
}
