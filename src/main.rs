use skyburst::Simulation;

fn main() {
    if let Err(e) = Simulation::new().with_title("Skyburst - Fireworks Demo").run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
