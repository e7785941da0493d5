/// Minimal TAP version 14 writer. Lines go to stdout as results arrive; the
/// plan is emitted by [`Tap::finish`].
pub struct Tap {
    count: usize,
    failures: usize,
}

impl Tap {
    pub fn new() -> Self {
        println!("TAP version 14");
        Tap {
            count: 0,
            failures: 0,
        }
    }

    pub fn ok(&mut self, name: &str) {
        self.count += 1;
        println!("ok {} - {}", self.count, name);
    }

    pub fn not_ok(&mut self, name: &str, reason: impl AsRef<str>) {
        self.count += 1;
        self.failures += 1;
        println!("not ok {} - {}", self.count, name);
        for line in reason.as_ref().lines() {
            println!("  # {}", line);
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn failure_count(&self) -> usize {
        self.failures
    }

    pub fn finish(self) {
        println!("1..{}", self.count);
    }
}
