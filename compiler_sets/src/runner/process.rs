//!
//! The OS process runner.
//!

use std::io::Read;
use std::path::Path;
use std::time::Duration;
use std::time::Instant;

use super::Runner;

///
/// The OS process runner.
///
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    /// The time a subprocess is allowed to run.
    timeout: Duration,
}

impl ProcessRunner {
    /// The default subprocess timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// The exit polling interval.
    const POLL_INTERVAL: Duration = Duration::from_millis(10);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    ///
    /// Spawns a thread draining the pipe into a buffer.
    ///
    fn drain<R>(pipe: Option<R>) -> std::thread::JoinHandle<Vec<u8>>
    where
        R: Read + Send + 'static,
    {
        std::thread::spawn(move || {
            let mut buffer = Vec::new();
            if let Some(mut pipe) = pipe {
                let _ = pipe.read_to_end(&mut buffer);
            }
            buffer
        })
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT)
    }
}

impl Runner for ProcessRunner {
    fn run_and_get_output(
        &self,
        program: &Path,
        working_directory: &Path,
        arguments: &[&str],
    ) -> anyhow::Result<Vec<u8>> {
        let mut command = std::process::Command::new(program);
        command.stdin(std::process::Stdio::null());
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());
        command.args(arguments);
        if working_directory.is_dir() {
            command.current_dir(working_directory);
        }

        let mut process = command.spawn().map_err(|error| {
            anyhow::anyhow!("{program:?} subprocess spawning error: {error:?}")
        })?;
        let stdout = Self::drain(process.stdout.take());
        let stderr = Self::drain(process.stderr.take());

        let start = Instant::now();
        loop {
            match process.try_wait() {
                Ok(Some(_status)) => break,
                Ok(None) if start.elapsed() >= self.timeout => {
                    let _ = process.kill();
                    let _ = process.wait();
                    // A surviving grandchild may still hold the pipes open, so the drain
                    // threads are detached and end once the last writer exits.
                    drop(stdout);
                    drop(stderr);
                    anyhow::bail!(
                        "{program:?} subprocess timed out after {}s",
                        self.timeout.as_secs()
                    );
                }
                Ok(None) => std::thread::sleep(Self::POLL_INTERVAL),
                Err(error) => {
                    anyhow::bail!("{program:?} subprocess waiting error: {error:?}")
                }
            }
        }

        let mut output = stdout
            .join()
            .map_err(|_| anyhow::anyhow!("{program:?} stdout reading error"))?;
        let stderr = stderr
            .join()
            .map_err(|_| anyhow::anyhow!("{program:?} stderr reading error"))?;
        output.extend(stderr);
        Ok(output)
    }
}
