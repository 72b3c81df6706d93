use anyhow::Result;
use std::io;
use table3d::draw::{draw_edges, draw_faces, draw_points, start_session};
use table3d::input::read_table;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let table = read_table(&mut input, &mut output)?;
    let parts = table.parts()?;

    let session = start_session()?;
    for part in parts.iter() {
        // Wood-like fill, darker wireframe, red vertex markers
        draw_faces(&session, part, (0.87, 0.72, 0.53, 1.0))?;
        draw_edges(&session, part, 0.05, (0.3, 0.25, 0.2, 1.0))?;
        draw_points(&session, part, 0.3, (1.0, 0.0, 0.0, 1.0))?;
    }

    println!(
        "{} table with {} legs sent to the viewer ({} parts).",
        table.plot.shape(),
        table.leg_positions().len(),
        parts.len()
    );

    Ok(())
}
