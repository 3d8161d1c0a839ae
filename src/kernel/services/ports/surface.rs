/// Outbound half of the rendering-surface protocol.
///
/// The platform shell implements this over whatever hosts the embedded
/// editor (a web view, a test double). Delivery is fire-and-forget; the
/// surface answers through its own callbacks, which the shell feeds back
/// into the kernel as actions (`SurfaceReady`, `SurfaceContentChanged`).
pub trait SurfaceTransport: Send + Sync {
    fn eval(&self, script: &str);
}
