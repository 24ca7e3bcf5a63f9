use std::sync::OnceLock;

const CONFIG_PATH: &str = "ringmesh.cfg";
const CONFIG_ENV: &str = "RINGMESH_CONFIG";

/// Input size ceilings enforced by the validation layer.
///
/// The values are deployment choices, not derived bounds: ear clipping is
/// quadratic in ring size, so the ceilings cap the worst-case call latency.
/// Holes are merged into the outer ring before clipping, so the total vertex
/// count is what bounds one call; the per-ring ceiling alone does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_ring_vertices: usize,
    pub max_holes: usize,
    /// Outer ring plus all holes.
    pub max_total_vertices: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_ring_vertices: 4096, max_holes: 64, max_total_vertices: 16384 }
    }
}

static LIMITS: OnceLock<Limits> = OnceLock::new();

/// Process-wide limits, read once from the config file.
///
/// The file is `$RINGMESH_CONFIG` or `ringmesh.cfg`; when it cannot be read
/// the defaults apply. The browser build never reads it.
pub fn limits() -> &'static Limits {
    LIMITS.get_or_init(read_config)
}

fn read_config() -> Limits {
    if cfg!(target_arch = "wasm32") {
        return Limits::default();
    }
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            let limits = parse_config(&text);
            log::info!("limits from {}: {:?}", path, limits);
            limits
        }
        Err(_) => Limits::default(),
    }
}

/// `key = value` lines, `#` comments. Unknown keys are ignored; values that are
/// not positive integers keep the default.
pub(crate) fn parse_config(text: &str) -> Limits {
    let mut cfg = Limits::default();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.splitn(2, '=');
        let key = parts.next().unwrap_or("").trim();
        let value = parts.next().unwrap_or("").trim();

        let slot = if key.eq_ignore_ascii_case("max_ring_vertices") {
            &mut cfg.max_ring_vertices
        } else if key.eq_ignore_ascii_case("max_holes") {
            &mut cfg.max_holes
        } else if key.eq_ignore_ascii_case("max_total_vertices") {
            &mut cfg.max_total_vertices
        } else {
            continue;
        };

        match value.parse::<usize>() {
            Ok(n) if n > 0 => *slot = n,
            _ => log::warn!("config: ignoring {} = {:?}", key, value),
        }
    }

    cfg
}
