use argh::FromArgs;

use planar::geometry::Point;
use planar::matrix::MatrixAlgebra;
use planar::transform::{RenderSurface, Transform};

#[derive(FromArgs)]
/// Compose a 2D transform pipeline, map a point through it and print its style string
struct Args {
    /// rotation in degrees
    #[argh(option, short = 'r', default = "0.0")]
    rotate: f64,

    /// uniform scale factor
    #[argh(option, short = 's', default = "1.0")]
    scale: f64,

    /// horizontal translation
    #[argh(option, default = "0.0")]
    translate_x: f64,

    /// vertical translation
    #[argh(option, default = "0.0")]
    translate_y: f64,

    /// x coordinate of the point to map
    #[argh(option, default = "1.0")]
    x: f64,

    /// y coordinate of the point to map
    #[argh(option, default = "0.0")]
    y: f64,

    /// order in which the steps are applied, e.g. "scale,rotate,translate"
    #[argh(option, default = "String::from(\"scale,rotate,translate\")")]
    order: String,
}

// prints every transform call it receives, like a canvas with tracing on
struct LoggingSurface {
    calls: usize,
}

impl RenderSurface for LoggingSurface {
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.calls += 1;
        log::info!("surface.transform({a}, {b}, {c}, {d}, {e}, {f})");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // build the pipeline in the requested order
    let mut pipeline = Transform::identity_matrix();
    for step in args.order.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let t = match step {
            "rotate" => Transform::rotation_matrix(args.rotate)?,
            "scale" => Transform::scale_matrix(args.scale)?,
            "translate" => Transform::translation_matrix(&(args.translate_x, args.translate_y))?,
            other => return Err(format!("unknown step '{other}' in --order").into()),
        };
        log::debug!("{step}: {t}");
        pipeline.compose(&t)?;
    }

    println!("transform:   {pipeline}");
    println!("determinant: {}", pipeline.determinant()?);

    let mut point = Point::new(args.x, args.y)?;
    point.apply_transform(&pipeline)?;
    println!("({}, {}) -> ({}, {})", args.x, args.y, point.x, point.y);

    let mut surface = LoggingSurface { calls: 0 };
    pipeline.apply_to_surface(&mut surface);
    match pipeline.apply_inverse_to_surface(&mut surface) {
        Ok(()) => println!("surface restored after {} calls", surface.calls),
        Err(e) => println!("surface left transformed: {e}"),
    }

    Ok(())
}
