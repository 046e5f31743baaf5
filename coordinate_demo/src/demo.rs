use coordinate_systems::prelude::*;
use std::io::Write;
use tracing::debug;

use crate::console::Console;
use crate::errors::DemoErrors;

pub const BANNER: &str = "=== Coordinate systems demo ===";
pub const MENU: &str = "1 - Polar  2 - Cartesian  3 - Cylindrical  4 - All";
pub const PROMPT: &str = "Selection (1-4): ";
pub const EXIT_MESSAGE: &str = "Press Enter to exit...";

// radius, angle
const POLAR_DEMO: (f64, f64) = (5.0, 45.0);
// x, y
const CARTESIAN_DEMO: (f64, f64) = (3.0, 4.0);
// rho, phi, z
const CYLINDRICAL_DEMO: (f64, f64, f64) = (5.0, 45.0, 10.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Polar,
    Cartesian,
    Cylindrical,
    All,
}

impl Selection {
    /// Matches the menu token exactly. Anything else is not a selection.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Selection::Polar),
            "2" => Some(Selection::Cartesian),
            "3" => Some(Selection::Cylindrical),
            "4" => Some(Selection::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Menu token to use instead of prompting for one.
    pub selection: Option<String>,
    pub wait_for_exit: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            selection: None,
            wait_for_exit: true,
        }
    }
}

/// Runs the menu once: show it, read a selection, demo the chosen systems,
/// then wait for Enter. Unrecognized selections print nothing.
pub fn run(console: &mut dyn Console, options: &DemoOptions) -> Result<(), DemoErrors> {
    console.heading(BANNER)?;
    writeln!(console.out())?;
    writeln!(console.out(), "{MENU}")?;

    let token = match &options.selection {
        Some(token) => token.clone(),
        None => {
            write!(console.out(), "{PROMPT}")?;
            console.out().flush()?;
            console.read_line()?.unwrap_or_default()
        }
    };
    debug!("selection {token:?}");

    match Selection::parse(&token) {
        Some(selection) => run_selection(console.out(), selection)?,
        None => debug!("ignoring unrecognized selection {token:?}"),
    }

    writeln!(console.out())?;
    writeln!(console.out(), "{EXIT_MESSAGE}")?;
    console.out().flush()?;
    if options.wait_for_exit {
        console.read_line()?;
    }
    Ok(())
}

pub fn run_selection(out: &mut dyn Write, selection: Selection) -> Result<(), DemoErrors> {
    match selection {
        Selection::Polar => demo(out, &polar_demo()?)?,
        Selection::Cartesian => demo(out, &cartesian_demo())?,
        Selection::Cylindrical => demo(out, &cylindrical_demo()?)?,
        Selection::All => {
            writeln!(out)?;
            for cs in all_demos()? {
                cs.display_info(out)?;
                writeln!(out, "  Distance: {:.2}", cs.distance())?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Prints the description, projection and distance of one coordinate system.
fn demo<C>(out: &mut dyn Write, coord: &C) -> Result<(), DemoErrors>
where
    C: CoordinateConverter + CoordinateOperations,
{
    writeln!(out)?;
    writeln!(out, "{}", coord.describe())?;
    writeln!(out, "x={:.2}, y={:.2}", coord.get_x(), coord.get_y())?;
    writeln!(out, "Distance: {:.2}", coord.distance())?;
    Ok(())
}

fn polar_demo() -> Result<Polar, CoordinateSystemErrors> {
    let (radius, angle) = POLAR_DEMO;
    debug!("constructing polar demo");
    Polar::new(radius, angle)
}

fn cartesian_demo() -> Cartesian {
    let (x, y) = CARTESIAN_DEMO;
    debug!("constructing cartesian demo");
    Cartesian::new(x, y)
}

fn cylindrical_demo() -> Result<Cylindrical, CoordinateSystemErrors> {
    let (rho, phi, z) = CYLINDRICAL_DEMO;
    debug!("constructing cylindrical demo");
    Cylindrical::new(rho, phi, z)
}

/// The three demo systems in menu order, behind the shared enum.
pub fn all_demos() -> Result<Vec<CoordinateSystem>, CoordinateSystemErrors> {
    Ok(vec![
        polar_demo()?.into(),
        cartesian_demo().into(),
        cylindrical_demo()?.into(),
    ])
}
