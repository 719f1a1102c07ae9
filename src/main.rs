use std::thread::sleep;
use std::time::Duration;

use cube_snake::{Game, Prefs, Status};

// headless autoplay run, prints score changes until the game ends
fn main() {
    let mut game = match Game::new(Prefs::default()) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    game.set_autoplay(true);
    game.start();

    let mut last_score = 0;
    loop {
        game.update();
        let snapshot = game.snapshot();

        if snapshot.score != last_score {
            last_score = snapshot.score;
            println!(
                "score {:>3}  length {:>3}  {}s",
                snapshot.score,
                snapshot.segments.len(),
                snapshot.elapsed_time
            );
        }

        if snapshot.status != Status::Playing || snapshot.elapsed_time >= 60 {
            println!(
                "finished: {:?}, score {}, high score {}",
                snapshot.status, snapshot.score, snapshot.high_score
            );
            break;
        }

        sleep(Duration::from_millis(10));
    }
}
