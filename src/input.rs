//! Interactive input: prompts for the plot and leg parameters.
//!
//! Malformed input is reported and re-prompted indefinitely; the geometry
//! core never sees an invalid shape or dimension.

use crate::table::{CircleLeg, Leg, OvalPlot, Plot, RectLeg, RectPlot, Shape, Table};
use anyhow::{Result, anyhow};
use std::io::{BufRead, Write};

/// Allowed leg height range in cm (inclusive).
pub const MIN_LEG_HEIGHT: f64 = 25.0;
pub const MAX_LEG_HEIGHT: f64 = 90.0;

/// Tabletop thickness in cm (fixed at 30 mm).
pub const PLOT_HEIGHT: f64 = 3.0;

pub fn is_valid_leg_height(height: f64) -> bool {
    (MIN_LEG_HEIGHT..=MAX_LEG_HEIGHT).contains(&height)
}

fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("Unexpected end of input"));
    }
    Ok(line.trim().to_string())
}

/// Reads a shape until it is one of `accepted`.
fn read_shape<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    retry_prompt: &str,
    accepted: &[Shape],
) -> Result<Shape> {
    let mut prompt = prompt;
    loop {
        let line = read_line(input, output, prompt)?;
        if let Ok(shape) = line.parse::<Shape>() {
            if accepted.contains(&shape) {
                return Ok(shape);
            }
        }
        prompt = retry_prompt;
    }
}

/// Reads `N` whitespace-separated numbers, continuing across lines until
/// enough are collected. A malformed token discards the collected values
/// and starts over.
fn read_floats<const N: usize, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<[f64; N]> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut collected: Vec<f64> = Vec::with_capacity(N);
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(anyhow!("Unexpected end of input"));
        }
        for tok in line.split_whitespace() {
            if collected.len() == N {
                break; // extra tokens on the line are dropped
            }
            match tok.parse::<f64>() {
                Ok(value) => collected.push(value),
                Err(_) => {
                    collected.clear();
                    writeln!(output, "Could not read {} number(s), try again.", N)?;
                    write!(output, "{}", prompt)?;
                    output.flush()?;
                    break;
                }
            }
        }
        if collected.len() == N {
            let mut values = [0.0; N];
            values.copy_from_slice(&collected);
            return Ok(values);
        }
    }
}

fn read_leg<R: BufRead, W: Write>(input: &mut R, output: &mut W, height: f64) -> Result<Leg> {
    let shape = read_shape(
        input,
        output,
        "Insert legs shape (valid options are: square, rectangle and circle): ",
        "Incorrect legs shape. Insert new legs shape (valid options are: square, rectangle and circle): ",
        &[Shape::Rectangle, Shape::Circle, Shape::Square],
    )?;

    let leg = match shape {
        Shape::Square => {
            let [width] = read_floats(input, output, "Insert square width: ")?;
            Leg::Rect(RectLeg::square(width, height, None))
        }
        Shape::Rectangle => {
            let [width, length] =
                read_floats(input, output, "Insert rectangle width and length: ")?;
            Leg::Rect(RectLeg::new(width, length, height, None))
        }
        Shape::Circle => {
            let [radius] = read_floats(input, output, "Insert circle radius: ")?;
            Leg::Circle(CircleLeg::new(radius, height, None))
        }
        _ => unreachable!("shape was validated above"),
    };

    Ok(leg)
}

/// Runs the full prompt sequence and returns the assembled table.
pub fn read_table<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Table> {
    let plot_shape = read_shape(
        input,
        output,
        "Insert plot shape (valid options are: rectangle and oval): ",
        "Incorrect plot shape. Insert new plot shape (valid options are: rectangle and oval): ",
        &[Shape::Rectangle, Shape::Oval],
    )?;

    let [plot_width, plot_length] = read_floats(input, output, "Insert plot width and length: ")?;
    let plot = match plot_shape {
        Shape::Rectangle => Plot::Rect(RectPlot::new(plot_width, plot_length, PLOT_HEIGHT, None)),
        Shape::Oval => Plot::Oval(OvalPlot::new(plot_width, plot_length, PLOT_HEIGHT, None)),
        _ => unreachable!("shape was validated above"),
    };

    let mut prompt = "Insert legs height: ";
    let leg_height = loop {
        let [height] = read_floats(input, output, prompt)?;
        if is_valid_leg_height(height) {
            break height;
        }
        prompt = "Legs height must be between 25 and 90 cm. Insert new height: ";
    };

    let leg = read_leg(input, output, leg_height)?;

    Ok(Table::new(plot, leg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> Result<Table> {
        let mut output: Vec<u8> = Vec::new();
        read_table(&mut Cursor::new(input), &mut output)
    }

    #[test]
    fn test_leg_height_bounds() {
        assert!(!is_valid_leg_height(24.9));
        assert!(is_valid_leg_height(25.0));
        assert!(is_valid_leg_height(90.0));
        assert!(!is_valid_leg_height(90.1));
    }

    #[test]
    fn test_rect_session() -> Result<()> {
        let table = run("rectangle\n100 60\n70\nsquare\n10\n")?;
        assert_eq!(table.plot.shape(), Shape::Rectangle);
        assert_eq!(table.plot.height(), PLOT_HEIGHT);
        assert_eq!(table.leg.height(), 70.);
        assert_eq!(table.leg_positions().len(), 4);
        Ok(())
    }

    #[test]
    fn test_oval_session() -> Result<()> {
        let table = run("oval\n120 100\n70\ncircle\n3\n")?;
        assert_eq!(table.plot.shape(), Shape::Oval);
        assert_eq!(table.leg_positions().len(), 3);
        Ok(())
    }

    #[test]
    fn test_invalid_heights_reprompted() -> Result<()> {
        let table = run("rect\n100 60\n24.9\n90.1\n25\ncircle\n3\n")?;
        assert_eq!(table.leg.height(), 25.);
        Ok(())
    }

    #[test]
    fn test_upper_bound_accepted() -> Result<()> {
        let table = run("rect\n100 60\n90\ncircle\n3\n")?;
        assert_eq!(table.leg.height(), 90.);
        Ok(())
    }

    #[test]
    fn test_invalid_plot_shape_reprompted() -> Result<()> {
        // Circle is a valid shape token but not a valid plot shape.
        let table = run("banana\ncircle\noval\n120 100\n70\nrectangle\n4 6\n")?;
        assert_eq!(table.plot.shape(), Shape::Oval);
        assert_eq!(table.leg.shape(), Shape::Rectangle);
        Ok(())
    }

    #[test]
    fn test_malformed_numbers_reprompted() -> Result<()> {
        let table = run("rect\nabc def\n100 60\n70\nsquare\n10\n")?;
        assert_eq!(table.plot.width(), 100.);
        Ok(())
    }

    #[test]
    fn test_numbers_accepted_across_lines() -> Result<()> {
        let table = run("rect\n100\n60\n70\nsquare\n10\n")?;
        assert_eq!(table.plot.width(), 100.);
        assert_eq!(table.plot.length(), 60.);
        assert_eq!(table.leg.height(), 70.);
        Ok(())
    }

    #[test]
    fn test_eof_is_an_error() {
        assert!(run("rect\n").is_err());
    }

    #[test]
    fn test_oval_width_clamped_from_input() -> Result<()> {
        let table = run("oval\n200 100\n70\ncircle\n3\n")?;
        assert_eq!(table.plot.width(), 130.);
        Ok(())
    }
}
