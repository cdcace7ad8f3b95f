#![allow(dead_code)]

use zxbasic::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    for _ in 0..100 {
        match runtime.execute(cycles) {
            Event::Stopped => return s,
            Event::Errors(error) => s.push_str(&format!("{}\n", error)),
            Event::Running => {}
        }
    }
    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles * 100));
    s
}

pub fn run(source: &str) -> (Runtime, String) {
    let mut r = Runtime::new(source);
    r.seed(1);
    let s = exec(&mut r);
    (r, s)
}
