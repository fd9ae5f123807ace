use inspection_sampler::{
    FixedIncrementer, Incrementable, InspectionSelector, RandomIncrementer, SequentialIncrementer,
};

fn main() {
    env_logger::init();

    println!("Starting inspection sampler demo");

    let names = ["sequential", "fixed(7)", "random"];
    let counters: Vec<Box<dyn Incrementable>> = vec![
        Box::new(SequentialIncrementer::new()),
        Box::new(FixedIncrementer::with_step(7)),
        Box::new(RandomIncrementer::new()),
    ];
    let mut selectors: Vec<_> = names
        .into_iter()
        .zip(counters.into_iter().map(InspectionSelector::new))
        .collect();

    for round in 1..=5 {
        for (name, selector) in selectors.iter_mut() {
            let position = selector.sample_device_position();
            println!("round {} {:>10}: inspect device {}", round, name, position);
        }
    }
}
