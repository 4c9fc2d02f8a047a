use pagesafe::{Link, LinkZoneEvaluator, PositionedElement};
use std::time::Instant;

struct Args {
    elements: usize,
    rounds: usize,
    assert_ms: Option<f64>,
}

fn parse_args() -> Args {
    let mut out = Args { elements: 10_000, rounds: 200, assert_ms: None };
    for a in std::env::args().skip(1) {
        let Some((key, val)) = a.split_once('=') else { continue };
        match key {
            "--elements" => out.elements = val.parse().unwrap_or(out.elements),
            "--rounds" => out.rounds = val.parse().unwrap_or(out.rounds),
            "--assert-ms" => out.assert_ms = val.parse().ok(),
            _ => eprintln!("ignoring unknown argument {}", a),
        }
    }
    out
}

/// Boxes swept down the page and around the circle, with or without a link.
fn sweep(count: usize, linked: bool) -> Vec<PositionedElement> {
    (0..count).map(|i| {
        let y = (i % 800) as f64;
        let angle = (i * 7 % 720) as f64 - 360.0;
        let el = PositionedElement::new(format!("e{}", i), y, 40.0 + (i % 5) as f64 * 20.0, 30.0).with_rotation(angle);
        if linked { el.with_link(Link::new("https://example.com")) } else { el }
    }).collect()
}

/// Median per-round time in ms, and how many elements the last round flagged.
fn time_rounds(ev: &LinkZoneEvaluator, els: &[PositionedElement], rounds: usize) -> (f64, usize) {
    let mut samples: Vec<f64> = Vec::with_capacity(rounds);
    let mut flagged = 0;
    for _ in 0..rounds.max(1) {
        let t0 = Instant::now();
        flagged = els.iter().filter(|el| ev.is_link_below_limit(el)).count();
        samples.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    samples.sort_by(|a, b| a.total_cmp(b));
    (samples[samples.len() / 2], flagged)
}

fn main() {
    let args = parse_args();
    let ev = LinkZoneEvaluator::default();

    // Unlinked elements exercise only the early return; linked ones pay for the trig
    let (linked_ms, flagged) = time_rounds(&ev, &sweep(args.elements, true), args.rounds);
    let (bare_ms, bare_flagged) = time_rounds(&ev, &sweep(args.elements, false), args.rounds);
    assert_eq!(bare_flagged, 0, "unlinked elements must never be flagged");

    let ratio = if args.elements == 0 { 0.0 } else { flagged as f64 / args.elements as f64 };
    println!(
        "elements={} rounds={} limit={:.3} flagged={} flagged_ratio={:.3} linked_median_ms={:.4} unlinked_median_ms={:.4}",
        args.elements, args.rounds, ev.limit(), flagged, ratio, linked_ms, bare_ms
    );
    if let Some(th) = args.assert_ms {
        if linked_ms > th {
            eprintln!("FAIL: linked median {:.4} ms > threshold {:.3} ms", linked_ms, th);
            std::process::exit(1);
        }
    }
}
