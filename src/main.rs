use bee_solver::cli::parse_cli;
use bee_solver::solver::solve;
use bee_solver::syllables::load_syllable_map_from_file;
use bee_solver::wordbank::load_dictionary_from_file;
use std::process;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let dictionary = match load_dictionary_from_file(&cli.dictionary) {
        Ok(words) => words,
        Err(e) => {
            eprintln!(
                "Failed to load dictionary from '{}': {e}",
                cli.dictionary.display()
            );
            process::exit(1);
        }
    };
    log::info!("Loaded {} dictionary words.", dictionary.len());

    let syllables = match load_syllable_map_from_file(&cli.syllable_path) {
        Ok(map) => map,
        Err(e) => {
            eprintln!(
                "Failed to load syllable data from '{}': {e}",
                cli.syllable_path.display()
            );
            process::exit(1);
        }
    };
    log::info!("Loaded {} syllable entries.", syllables.len());

    let solutions = solve(&dictionary, &cli.hive, &syllables);
    log::info!("Found {} solutions for hive {}.", solutions.len(), cli.hive);

    for (word, score) in &solutions {
        println!("{word} {score}");
    }
}
