// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! smart-edge CLI entrypoint.
//!
//! Reads a scene (nodes, edges, options) as JSON and prints one routing report per edge.
//! Diagnostics go to stderr; set `RUST_LOG=smart_edge=debug` to watch the router work.

use std::error::Error;
use std::io::Read;

use smart_edge::model::Scene;
use smart_edge::render::render_route_ascii;
use smart_edge::report::SceneReport;
use smart_edge::router::SmartEdgeRouter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<scene.json>] [--compact]\n  {program} [<scene.json>] --ascii\n  {program} --schema\n\nReads the scene from stdin when no file is given.\n--ascii prints the routing grid of every edge instead of the JSON report.\n--compact prints the report on a single line.\n--schema prints the JSON schema of the scene format."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    scene_path: Option<String>,
    ascii: bool,
    schema: bool,
    compact: bool,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--ascii" => {
                if options.ascii {
                    return Err(());
                }
                options.ascii = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--compact" => {
                if options.compact {
                    return Err(());
                }
                options.compact = true;
            }
            "-" => {
                if options.scene_path.is_some() {
                    return Err(());
                }
                options.scene_path = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.scene_path.is_some() {
                    return Err(());
                }
                options.scene_path = Some(arg);
            }
        }
    }

    if options.schema && (options.ascii || options.compact || options.scene_path.is_some()) {
        return Err(());
    }
    if options.ascii && options.compact {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_scene(path: Option<&str>) -> Result<Scene, Box<dyn Error>> {
    let json = match path {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .map_err(|err| format!("cannot read scene file `{path}`: {err}"))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(Scene::from_json(&json)?)
}

fn ascii_report(scene: &Scene, router: &SmartEdgeRouter) -> Result<String, Box<dyn Error>> {
    let nodes = scene.node_boxes();
    let mut out = String::new();
    for (idx, edge) in scene.edge_requests()?.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("edge {}\n", edge.id));
        match router.trace(&nodes, &edge.source, &edge.target) {
            Ok((route, Some(grid))) => {
                out.push_str(&render_route_ascii(&grid, &route)?);
                out.push('\n');
            }
            Ok((_, None)) => out.push_str("(no nodes, nothing to route around)\n"),
            Err(err) => out.push_str(&format!("error: {err}\n")),
        }
    }
    Ok(out)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "smart-edge".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        if options.schema {
            let schema = schemars::schema_for!(Scene);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            return Ok(());
        }

        let scene = read_scene(options.scene_path.as_deref())?;
        let router = SmartEdgeRouter::from_options(scene.options().clone())?;

        if options.ascii {
            print!("{}", ascii_report(&scene, &router)?);
            return Ok(());
        }

        let outcomes = router.render_all(&scene.node_boxes(), &scene.edge_requests()?)?;
        let report = SceneReport::from_outcomes(&outcomes);
        let json = if options.compact {
            serde_json::to_string(&report)?
        } else {
            serde_json::to_string_pretty(&report)?
        };
        println!("{json}");
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("smart-edge: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{ascii_report, parse_options, CliOptions};
    use smart_edge::model::Scene;
    use smart_edge::router::SmartEdgeRouter;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_positional_scene_path() {
        let options = parse_options(args(&["scene.json", "--compact"])).expect("parse options");
        assert_eq!(options.scene_path.as_deref(), Some("scene.json"));
        assert!(options.compact);
        assert!(!options.ascii);
    }

    #[test]
    fn parses_stdin_dash() {
        let options = parse_options(args(&["-", "--ascii"])).expect("parse options");
        assert_eq!(options.scene_path.as_deref(), Some("-"));
        assert!(options.ascii);
    }

    #[test]
    fn parses_schema_alone() {
        let options = parse_options(args(&["--schema"])).expect("parse options");
        assert!(options.schema);
    }

    #[test]
    fn rejects_conflicting_or_repeated_flags() {
        parse_options(args(&["--schema", "scene.json"])).unwrap_err();
        parse_options(args(&["--ascii", "--compact"])).unwrap_err();
        parse_options(args(&["--ascii", "--ascii"])).unwrap_err();
        parse_options(args(&["one.json", "two.json"])).unwrap_err();
        parse_options(args(&["--nope"])).unwrap_err();
    }

    #[test]
    fn ascii_report_lists_every_edge() {
        let scene = Scene::from_json(
            r#"{
                "options": { "nodePadding": 0 },
                "nodes": [
                    { "id": "a", "x": 0, "y": 0, "width": 20, "height": 20 },
                    { "id": "b", "x": 60, "y": 0, "width": 20, "height": 20 }
                ],
                "edges": [
                    { "id": "ab", "source": { "node": "a", "side": "right" }, "target": { "node": "b", "side": "left" } },
                    { "id": "lost", "source": { "node": "a", "side": "right" }, "target": { "x": 500, "y": 0 } }
                ]
            }"#,
        )
        .expect("scene");
        let router = SmartEdgeRouter::from_options(scene.options().clone()).expect("router");

        let text = ascii_report(&scene, &router).expect("report");
        assert!(text.starts_with("edge ab\n..........\n"), "{text}");
        assert!(text.contains(".##S**E##."), "{text}");
        assert!(text.contains("edge lost\nerror: invalid geometry"), "{text}");
    }
}
