//! Headless симуляция MARSHRUN
//!
//! Запускает Bevy App без рендера: игрок, гончая и пара сбитых уток.
//! Полезно для прогонки поведения и проверки детерминизма глазами.

use std::time::Duration;

use bevy::prelude::*;
use marshrun_simulation::*;

fn main() {
    let seed = 42;
    println!("Starting MARSHRUN headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    // Игрок и гончая
    {
        let mut commands = app.world_mut().commands();
        spawn_player(&mut commands, Vec3::new(8.0, 0.0, 0.0));
        spawn_hound(&mut commands, Vec3::ZERO);
    }

    // Пара сбитых уток в камышах
    app.world_mut()
        .resource_scope(|world, mut registry: Mut<DuckRegistry>| {
            let mut commands = world.commands();
            spawn_duck(&mut commands, &mut registry, Vec3::new(4.0, 0.0, 3.0), true);
            spawn_duck(&mut commands, &mut registry, Vec3::new(-6.0, 0.0, 2.0), true);
        });

    app.world_mut().flush();
    app.world_mut().resource_mut::<DebugDraw>().enabled = true;

    let timestep = Duration::from_secs_f64(1.0 / 60.0);

    // Прогоняем 1200 тиков (20 секунд при 60Hz)
    for tick in 0..1200 {
        app.world_mut()
            .resource_mut::<Time<Fixed>>()
            .advance_by(timestep);
        app.world_mut().run_schedule(FixedUpdate);

        // Голоса гончей уходят в "аудио" (здесь просто stdout)
        let barks: Vec<BarkRequested> = app
            .world_mut()
            .resource_mut::<Events<BarkRequested>>()
            .drain()
            .collect();
        for bark in barks {
            println!("Tick {}: hound {:?} barks ({:?})", tick, bark.hound, bark.kind);
        }

        if tick % 120 == 0 {
            let mut states = app.world_mut().query_filtered::<&HoundState, With<Hound>>();
            for state in states.iter(app.world()) {
                println!("Tick {}: hound state = {:?}", tick, state);
            }

            let ducks_left = app.world().resource::<DuckRegistry>().len();
            let shapes = app.world().resource::<DebugDraw>().shapes.len();
            println!("Tick {}: {} ducks left, {} debug shapes", tick, ducks_left, shapes);
        }
    }

    println!("Simulation complete!");
}
