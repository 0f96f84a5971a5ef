use crate::core::{Candidate, OracleSource, PrimalityOracle};
use crate::utils::error::{PrimeError, Result};
use libloading::Library;
use std::os::raw::c_uint;
use std::path::{Path, PathBuf};

/// Signature of a foreign `is_prime`, as declared in `include/prime.h`.
pub type IsPrimeFn = unsafe extern "C" fn(c_uint) -> bool;

/// Calls this crate's own exported `is_prime` through the C ABI.
#[derive(Debug, Clone, Copy)]
pub struct LinkedOracle {
    func: extern "C" fn(c_uint) -> bool,
}

impl LinkedOracle {
    pub fn new() -> Self {
        Self {
            func: crate::ffi::is_prime,
        }
    }
}

impl Default for LinkedOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimalityOracle for LinkedOracle {
    fn is_prime(&self, candidate: Candidate) -> bool {
        (self.func)(candidate.value())
    }

    fn name(&self) -> &str {
        "linked"
    }
}

/// An `is_prime` resolved from a shared library at run time.
pub struct NativeOracle {
    func: IsPrimeFn,
    label: String,
    // Must outlive `func`.
    _library: Library,
}

impl NativeOracle {
    pub fn load<P: AsRef<Path>>(path: P, symbol: &str) -> Result<Self> {
        let path = path.as_ref();
        let to_error = |source| PrimeError::LibraryLoad {
            path: path.display().to_string(),
            source,
        };

        tracing::debug!("Loading primality library: {}", path.display());
        // SAFETY: loading runs the library's initialisers; callers pick the file.
        let library = unsafe { Library::new(path) }.map_err(to_error)?;

        // SAFETY: the symbol is trusted to have the `IsPrimeFn` signature.
        let func = unsafe {
            let symbol = library.get::<IsPrimeFn>(symbol.as_bytes()).map_err(to_error)?;
            *symbol
        };
        tracing::debug!("Resolved symbol '{}'", symbol);

        Ok(Self {
            func,
            label: format!("{}:{}", path.display(), symbol),
            _library: library,
        })
    }
}

impl PrimalityOracle for NativeOracle {
    fn is_prime(&self, candidate: Candidate) -> bool {
        // SAFETY: `func` came from `_library`, which is still loaded.
        unsafe { (self.func)(candidate.value()) }
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// Builds the oracle named by `source`.
pub fn open_oracle(source: &OracleSource) -> Result<Box<dyn PrimalityOracle>> {
    match source {
        OracleSource::Builtin => Ok(Box::new(LinkedOracle::new())),
        OracleSource::Library { path, symbol } => Ok(Box::new(NativeOracle::load(path, symbol)?)),
    }
}

/// Platform file name of a library, e.g. `libprime.so` for `prime`.
pub fn library_filename(stem: &str) -> PathBuf {
    PathBuf::from(libloading::library_filename(stem))
}
