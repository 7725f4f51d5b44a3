//! Console blackjack against the house.

use std::io;

use shoejack::{Game, INITIAL_CREDITS, Session, SessionError, Shoe};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut game = Game::new(Shoe::new(), INITIAL_CREDITS);
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());

    match session.run(&mut game) {
        Ok(credits) => log::info!("session ended with {credits} credits"),
        Err(SessionError::Shoe(err)) => {
            log::warn!("session cut short: {err}");
            drop(session);
            println!("The shoe is out of cards. Game over. Thanks for playing!");
        }
        Err(err) => log::error!("session failed: {err}"),
    }
}
