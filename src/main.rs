use std::fs;

use green_egd::{
    summarize, AnalysisConfig, GeographicPoint, GreenSummary, LocalProjection, PlanarPoint, ShapeAnalysis,
};

/// L-shaped green walked from the inner corner, laid out in meters
fn demo_perimeter() -> Vec<GeographicPoint> {
    let projection = LocalProjection::new(&GeographicPoint::new(33.5031, -82.0206));
    [
        (8.0, 8.0),
        (8.0, 30.0),
        (4.0, 36.0),
        (-2.0, 34.0),
        (0.0, 0.0),
        (34.0, -2.0),
        (36.0, 4.0),
        (30.0, 8.0),
    ]
    .iter()
    .enumerate()
    .map(|(i, &(x, y))| {
        projection
            .from_local(&PlanarPoint::new(x, y))
            .with_timestamp(1_723_111_199_000 + i as u64 * 2_000)
    })
    .collect()
}

fn print_report(summary: &GreenSummary) {
    println!("Points: {}", summary.point_count);
    println!("Area: {:.1} m^2 ({:.1} yd^2)", summary.area_m2, summary.area_yd2());
    println!("Perimeter: {:.1} m ({:.1} yd)", summary.perimeter_m, summary.perimeter_yd());

    let Some(classification) = &summary.analysis else {
        println!("Not enough points for an EGD yet");
        return;
    };
    let shape = &classification.shape;
    let whole = shape.whole();
    println!("Concavity: {:.3}", classification.concavity);
    println!(
        "Length {:.1} yd, width {:.1} yd, ratio {:.2}",
        whole.length, whole.width, whole.ratio
    );
    println!("EGD: {:.1} yd ({})", whole.egd, shape.method());

    if let Some(portions) = shape.portions() {
        println!("Split at point {}", portions.elbow_index);
        for (label, portion) in [("first", &portions.first), ("second", &portions.second)] {
            match portion {
                Some(p) => println!(
                    "  {} portion: length {:.1} yd, width {:.1} yd, EGD {:.1} yd",
                    label, p.length, p.width, p.egd
                ),
                None => println!("  {} portion: too few points", label),
            }
        }
    }

    if let ShapeAnalysis::Anomalous { anomalous, .. } = shape {
        println!(
            "Spine: {} points, curved {:.1} yd vs straight {:.1} yd",
            anomalous.spine.len(),
            anomalous.curved_length,
            anomalous.straight_length
        );
        for sample in &anomalous.samples {
            println!("  width at {}: {:.1} yd", sample.mark.label(), sample.segment.width);
        }
        if anomalous.is_manual_required {
            println!("Manual rating required");
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("green_egd", |s| s.as_str());

    if args.len() == 2 && args[1] == "--demo" {
        let summary = summarize(&demo_perimeter(), &AnalysisConfig::default());
        print_report(&summary);
        return Ok(());
    }

    let (perimeter_path, config) = match args.len() {
        2 => (&args[1], AnalysisConfig::default()),
        4 if args[2] == "--config" => (&args[1], AnalysisConfig::load_from_file(&args[3])?),
        _ => {
            eprintln!("Usage: {} <perimeter.json> [--config <config.json>]", program);
            eprintln!("   or: {} --demo", program);
            return Err("invalid arguments".into());
        }
    };

    let content = fs::read_to_string(perimeter_path)?;
    let perimeter: Vec<GeographicPoint> = serde_json::from_str(&content)?;

    let summary = summarize(&perimeter, &config);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
