use futures_util::future::LocalBoxFuture;

/// Dónde se ejecutan las tareas async que lanza el estado (carga del plan)
pub trait TaskSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Event loop del navegador
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl TaskSpawner for BrowserSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
