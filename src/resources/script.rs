//! Lua scripting runtime: the per-frame user-script hook.
//!
//! Scripts live under `<assets>/scripts/*.lua`. Each script evaluates to
//! either a function (treated as the frame hook) or a table with optional
//! `on_load` and `on_frame` entries. `on_load` runs once at load time;
//! `on_frame` runs once per simulation frame with a read-only context table:
//!
//! ```lua
//! return {
//!     on_frame = function(ctx)
//!         if ctx.player.just_respawned then
//!             game.spawn_bomb(ctx.player.x + 64, ctx.player.y)
//!         end
//!     end,
//! }
//! ```
//!
//! Scripts never touch the ECS world directly. The global `game` table is a
//! restricted facade that queues [`ScriptCmd`]s; the
//! [`script_frame_system`](crate::systems::script::script_frame_system)
//! drains and applies them after the callbacks return, so structural
//! mutation lands through deferred world access.

use mlua::prelude::*;
use std::cell::RefCell;
use std::path::Path;

/// Commands scripts can queue through the `game` facade.
#[derive(Debug, Clone)]
pub enum ScriptCmd {
    /// Teleport the player to a world position.
    SetPlayerPos { x: f32, y: f32 },
    /// Spawn a bomb at a world position.
    SpawnBomb { x: f32, y: f32 },
}

/// Read-only world snapshot handed to `on_frame` callbacks.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub player_x: f32,
    pub player_y: f32,
    pub lives: u32,
    pub just_respawned: bool,
    pub score: u32,
    pub state: &'static str,
}

/// Shared state accessible from Lua function closures, stored in Lua's
/// app_data so facade functions can queue commands.
struct ScriptAppData {
    commands: RefCell<Vec<ScriptCmd>>,
}

/// Owns the Lua interpreter and the registered frame hooks.
///
/// Lives in the world as a non-send resource (the interpreter is
/// single-threaded, like the rest of the frame loop).
pub struct ScriptRuntime {
    lua: Lua,
    on_frame: Vec<LuaRegistryKey>,
}

impl ScriptRuntime {
    pub fn new() -> LuaResult<Self> {
        let lua = Lua::new();
        lua.set_app_data(ScriptAppData {
            commands: RefCell::new(Vec::new()),
        });

        let game = lua.create_table()?;
        game.set(
            "set_player_pos",
            lua.create_function(|lua, (x, y): (f32, f32)| {
                let data = lua
                    .app_data_ref::<ScriptAppData>()
                    .expect("script app data");
                data.commands
                    .borrow_mut()
                    .push(ScriptCmd::SetPlayerPos { x, y });
                Ok(())
            })?,
        )?;
        game.set(
            "spawn_bomb",
            lua.create_function(|lua, (x, y): (f32, f32)| {
                let data = lua
                    .app_data_ref::<ScriptAppData>()
                    .expect("script app data");
                data.commands
                    .borrow_mut()
                    .push(ScriptCmd::SpawnBomb { x, y });
                Ok(())
            })?,
        )?;
        game.set(
            "log",
            lua.create_function(|_, message: String| {
                log::info!("[script] {}", message);
                Ok(())
            })?,
        )?;
        lua.globals().set("game", game)?;

        Ok(ScriptRuntime {
            lua,
            on_frame: Vec::new(),
        })
    }

    /// Load every `*.lua` file under `dir`, in name order. A missing
    /// directory simply means no scripts. Returns how many hooks were
    /// registered.
    pub fn load_all(&mut self, dir: &Path) -> Result<usize, String> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                log::warn!("No script directory at {}", dir.display());
                return Ok(0);
            }
        };

        let mut paths: Vec<_> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "lua"))
            .collect();
        paths.sort();

        let before = self.on_frame.len();
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let source = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?;
            self.register_script(&source, &name)?;
        }
        let loaded = self.on_frame.len() - before;
        log::info!("Loaded {} script hook(s) from {}", loaded, dir.display());
        Ok(loaded)
    }

    /// Evaluate one script chunk and register the hooks it returns.
    /// `on_load` runs immediately; its queued commands are drained on the
    /// next frame.
    pub fn register_script(&mut self, source: &str, name: &str) -> Result<(), String> {
        let value = self
            .lua
            .load(source)
            .set_name(name)
            .eval::<LuaValue>()
            .map_err(|e| format!("Failed to load script {}: {}", name, e))?;

        match value {
            LuaValue::Function(on_frame) => {
                let key = self
                    .lua
                    .create_registry_value(on_frame)
                    .map_err(|e| format!("Failed to register script {}: {}", name, e))?;
                self.on_frame.push(key);
            }
            LuaValue::Table(hooks) => {
                let on_load = hooks
                    .get::<Option<LuaFunction>>("on_load")
                    .map_err(|e| format!("Bad on_load in script {}: {}", name, e))?;
                if let Some(on_load) = on_load {
                    if let Err(e) = on_load.call::<()>(()) {
                        log::error!("Script {} on_load failed: {}", name, e);
                    }
                }
                let on_frame = hooks
                    .get::<Option<LuaFunction>>("on_frame")
                    .map_err(|e| format!("Bad on_frame in script {}: {}", name, e))?;
                if let Some(on_frame) = on_frame {
                    let key = self
                        .lua
                        .create_registry_value(on_frame)
                        .map_err(|e| format!("Failed to register script {}: {}", name, e))?;
                    self.on_frame.push(key);
                }
            }
            _ => log::warn!("Script {} returned no hooks", name),
        }
        Ok(())
    }

    /// Run every registered `on_frame` hook with a fresh context table.
    /// Script failures are logged and do not stop the other hooks.
    pub fn run_frame(&self, ctx: &FrameContext) {
        let table = match self.build_context(ctx) {
            Ok(table) => table,
            Err(e) => {
                log::error!("Failed to build script context: {}", e);
                return;
            }
        };
        for key in &self.on_frame {
            let hook: LuaFunction = match self.lua.registry_value(key) {
                Ok(hook) => hook,
                Err(e) => {
                    log::error!("Lost script hook: {}", e);
                    continue;
                }
            };
            if let Err(e) = hook.call::<()>(&table) {
                log::error!("Script on_frame failed: {}", e);
            }
        }
    }

    /// Take all commands queued since the last drain.
    pub fn drain_commands(&self) -> Vec<ScriptCmd> {
        let data = self
            .lua
            .app_data_ref::<ScriptAppData>()
            .expect("script app data");
        data.commands.take()
    }

    fn build_context(&self, ctx: &FrameContext) -> LuaResult<LuaTable> {
        let player = self.lua.create_table()?;
        player.set("x", ctx.player_x)?;
        player.set("y", ctx.player_y)?;
        player.set("lives", ctx.lives)?;
        player.set("just_respawned", ctx.just_respawned)?;

        let table = self.lua.create_table()?;
        table.set("player", player)?;
        table.set("score", ctx.score)?;
        table.set("state", ctx.state)?;
        Ok(table)
    }
}
