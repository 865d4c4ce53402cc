#![allow(non_snake_case)]
//! Interactive driver for the grapher core. Stands in for the UI: every
//! stdin line is one user event feeding the session.

use partial_grapher::Utils::logger::init_logger;
use partial_grapher::grapher::config::GraphConfig;
use partial_grapher::grapher::domain::SurfaceKind;
use partial_grapher::grapher::session::GraphSession;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

fn main() {
    init_logger(&std::env::var("LOG_LEVEL").unwrap_or_default());

    let config_path = Path::new("grapher.toml");
    let config = if config_path.is_file() {
        match GraphConfig::from_toml_file(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        }
    } else {
        GraphConfig::default()
    };
    println!(
        "3D grapher for f(x,y) and its partial derivatives (step {}, output in {:?})",
        config.step, config.output_dir
    );
    println!("commands:");
    println!("  f <expression>     set the function, e.g. f x^2 + y^2");
    println!("  x <min,max>        set the x range, e.g. x -10,10");
    println!("  y <min,max>        set the y range");
    println!("  plot               compute and draw all three surfaces");
    println!("  tab <original|dx|dy>  switch the visible surface");
    println!("  show               print the current session state");
    println!("  quit");

    let mut session = GraphSession::new(config);
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };
        match command {
            "" => {}
            "f" => session.set_expression(rest),
            "x" => session.set_x_range(rest),
            "y" => session.set_y_range(rest),
            "plot" => match session.request_plot() {
                Ok(()) => {
                    if let Some(surfaces) = session.surfaces() {
                        if let Some(text) = &surfaces.dx.derived_expression_text {
                            println!("df/dx = {}", text);
                        }
                        if let Some(text) = &surfaces.dy.derived_expression_text {
                            println!("df/dy = {}", text);
                        }
                    }
                    println!("graphs updated");
                }
                Err(e) => println!("error: {}", e),
            },
            "tab" => match SurfaceKind::from_str(rest) {
                Ok(kind) => match session.select_tab(kind) {
                    Ok(()) => println!("active tab: {}", kind),
                    Err(e) => println!("error: {}", e),
                },
                Err(_) => println!("unknown tab '{}', expected original, dx or dy", rest),
            },
            "show" => {
                let state = session.state();
                println!("f(x,y)    = {}", state.expression_text);
                println!("x range   = {}", state.x_range_text);
                println!("y range   = {}", state.y_range_text);
                println!("active    = {}", state.active_tab);
                match &state.last_error {
                    Some(e) => println!("last error: {}", e),
                    None => println!("last error: none"),
                }
            }
            "quit" | "exit" => break,
            other => println!("unknown command '{}'", other),
        }
    }
}
