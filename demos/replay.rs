use ctrack::{CentroidTracker, Detection, Frame, Tracking};

/// Replays a detection dump through the tracker and prints live tracks.
///
/// Input is one frame per line, `<timestamp_ms>:<json detections array>`:
///
/// 1000:[{"x1":10.0,"y1":10.0,"x2":30.0,"y2":30.0,"p":0.9,"c":"backpack"}]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::BufRead;

    let mut args = std::env::args();

    let _ = args.next().unwrap();
    let in_file_name = args.next().expect("expected detections file name");
    let dets_file = std::fs::File::open(in_file_name)?;

    let mut tracker = CentroidTracker::new();

    let reader = std::io::BufReader::new(dets_file).lines();

    for line in reader {
        let line = line?;

        let (ts, detections): (f64, Vec<Detection>) = if let Some(idx) = line.find(':') {
            let (ts, vector) = line.split_at(idx);

            match (ts.parse::<u64>(), serde_json::from_str(&vector[1..])) {
                (Ok(ts), Ok(vector)) => (ts as f64 / 1000.0, vector),
                (Ok(_), _) => {
                    eprintln!("wrong file format: parse json failed");
                    continue;
                }
                (_, Ok(_)) => {
                    eprintln!("wrong file format: parse timestamp failed");
                    continue;
                }
                _ => {
                    eprintln!("wrong file format: parse failed");
                    continue;
                }
            }
        } else {
            eprintln!("wrong file format: expected `:`");
            continue;
        };

        let frame = Frame::new(ts, detections);
        let emitted = tracker.update(&frame, "video");

        for (id, track) in &emitted {
            println!(
                "{:.3} {} {} {:.2} ({:.1}, {:.1})",
                ts, id, track.label, track.confidence, track.center.x, track.center.y
            );
        }
    }

    Ok(())
}
