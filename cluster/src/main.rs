use std::env;
use std::time::Instant;

use apsp_graph::Graph;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).cloned().unwrap_or_else(|| "serial".to_string());
    let vertices: usize = args.get(2).unwrap_or(&"5".to_string()).parse()?;
    let density: f64 = args.get(3).unwrap_or(&"0.3".to_string()).parse()?;
    let workers: usize = args.get(4).unwrap_or(&"4".to_string()).parse()?;

    let graph = Graph::random(vertices, density, 1..=20)?;
    if vertices <= 10 {
        println!("Original graph:");
        print!("{}", graph);
    }

    let start = Instant::now();
    let result = match mode.as_str() {
        "serial" => apsp_solver::sequential::solve(&graph),
        "threads" => apsp_solver::threaded::solve(&graph, workers)?,
        "cluster" => apsp_cluster::solve(&graph, workers).await?,
        _ => {
            eprintln!("Unknown mode: {}", mode);
            eprintln!(
                "Usage: {} <mode> [vertices] [density] [workers]",
                args[0]
            );
            eprintln!("Modes:");
            eprintln!("  serial   - single-threaded solve");
            eprintln!("  threads  - shared-memory solve with <workers> threads");
            eprintln!("  cluster  - distributed solve with <workers> workers");
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if vertices <= 10 {
        println!("\nShortest paths:");
        print!("{}", result);
    }
    println!("\nExecution time: {} ms", elapsed.as_millis());

    Ok(())
}
