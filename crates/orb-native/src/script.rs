// Scripted stand-in for a camera face detector.
//
// A script is a comma separated list of steps, each producing detector
// output at the detector rate:
//
// - `present:N`, `absent:N`: N results with / without a face
// - `flicker:N`: N noisy results (two hits, one miss, repeating)
// - `fail`: one failed detection attempt
// - `stop`: camera stopped; the detector goes quiet

use anyhow::{bail, Context};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptStep {
    Faces { present: bool, results: u32 },
    Flicker { results: u32 },
    Fail,
    Stop,
}

/// Per-result face flags for a step, produced lazily; `fail` and `stop`
/// yield none.
pub fn step_samples(step: ScriptStep) -> impl Iterator<Item = bool> {
    let results = match step {
        ScriptStep::Faces { results, .. } | ScriptStep::Flicker { results } => results,
        ScriptStep::Fail | ScriptStep::Stop => 0,
    };
    (0..results).map(move |i| match step {
        ScriptStep::Faces { present, .. } => present,
        _ => i % 3 != 2,
    })
}

pub fn parse_script(script: &str) -> anyhow::Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for raw in script.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        let step = match token.split_once(':') {
            None => match token {
                "fail" => ScriptStep::Fail,
                "stop" => ScriptStep::Stop,
                other => bail!("unknown script step '{other}'"),
            },
            Some((kind, count)) => {
                let results: u32 = count
                    .trim()
                    .parse()
                    .with_context(|| format!("bad count in script step '{token}'"))?;
                match kind.trim() {
                    "present" => ScriptStep::Faces { present: true, results },
                    "absent" => ScriptStep::Faces { present: false, results },
                    "flicker" => ScriptStep::Flicker { results },
                    other => bail!("unknown script step '{other}'"),
                }
            }
        };
        steps.push(step);
    }
    if steps.is_empty() {
        bail!("empty detector script");
    }
    Ok(steps)
}
