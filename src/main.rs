//! Headless host for the inventory tags add-on
//!
//! Stands in for the game client: reads one command per line from stdin,
//! feeds the matching events to the plugin and prints what the client
//! would show. Tags and settings persist in `<data dir>/inventory_tags.db`.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use inventory_tags::commands::{
    dispatch, ConfigChanged, HostEvent, InventoryItem, InventoryTagsOverlay, InventoryTagsPlugin,
    MenuOpened, MenuOptionClicked, MenuRegistry, OverlayRegistry, WidgetMenuOptionClicked,
};
use inventory_tags::domain::{
    remove_tags, Color, GroupColors, GroupName, InventoryTab, MenuAction, MenuEntry, MenuOpcode,
    WidgetMenuOption, AMOUNT_KEY, CONFIG_GROUP, INVENTORY_WIDGET_ID, MENU_TARGET,
};
use inventory_tags::repository::{ConfigStore, ItemTagOperations, SqliteConfigStore};

const HELP: &str = "\
commands:
  configure | save          click the inventory tab option
  open <item>               open the menu of an inventory item
  click <row>               click a row of the last opened menu
  mark <item> <group>       tag an item directly
  remove <item>             clear an item's tag
  color <group> <color>     set a group color (#RRGGBB, or 'none')
  amount <n>                number of groups shown in the menu
  tags                      print all tags as JSON
  highlight <item>...       overlay outlines for the given inventory
  status                    current mode and tab options
  quit";

#[derive(Default)]
struct ConsoleMenus {
    registered: Vec<WidgetMenuOption>,
}

impl MenuRegistry for ConsoleMenus {
    fn add_managed_custom_menu(&mut self, option: WidgetMenuOption) {
        log::debug!("menu option added: {} {:?}", option.option, option.widget);
        self.registered.push(option);
    }

    fn remove_managed_custom_menu(&mut self, option: &WidgetMenuOption) {
        self.registered.retain(|o| o != option);
    }
}

#[derive(Default)]
struct ConsoleOverlays;

impl OverlayRegistry for ConsoleOverlays {
    fn add(&mut self, overlay: &InventoryTagsOverlay) {
        log::info!("overlay {} added", overlay.name());
    }

    fn remove(&mut self, overlay: &InventoryTagsOverlay) {
        log::info!("overlay {} removed", overlay.name());
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Toggle(&'static str),
    Open(i32),
    Click(usize),
    Mark(i32, GroupName),
    Remove(i32),
    SetColor(GroupName, Option<Color>),
    Amount(String),
    Tags,
    Highlight(Vec<i32>),
    Status,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let item = |i: usize| -> Result<i32, String> {
        args.get(i)
            .ok_or_else(|| "missing item id".to_string())?
            .parse::<i32>()
            .map_err(|e| format!("bad item id: {}", e))
    };
    let group = |i: usize| -> Result<GroupName, String> {
        args.get(i)
            .ok_or_else(|| "missing group".to_string())?
            .parse::<GroupName>()
            .map_err(|e| e.to_string())
    };

    match name {
        "configure" => Ok(Command::Toggle("Configure")),
        "save" => Ok(Command::Toggle("Save")),
        "open" => Ok(Command::Open(item(0)?)),
        "click" => args
            .first()
            .and_then(|row| row.parse().ok())
            .map(Command::Click)
            .ok_or_else(|| "usage: click <row>".to_string()),
        "mark" => Ok(Command::Mark(item(0)?, group(1)?)),
        "remove" => Ok(Command::Remove(item(0)?)),
        "color" => {
            let group = group(0)?;
            let color = match args.get(1).copied() {
                None | Some("none") => None,
                Some(raw) => Some(raw.parse::<Color>().map_err(|e| e.to_string())?),
            };
            Ok(Command::SetColor(group, color))
        }
        "amount" => args
            .first()
            .map(|n| Command::Amount(n.to_string()))
            .ok_or_else(|| "usage: amount <n>".to_string()),
        "tags" => Ok(Command::Tags),
        "highlight" => args
            .iter()
            .map(|id| id.parse::<i32>().map_err(|e| format!("bad item id: {}", e)))
            .collect::<Result<Vec<_>, _>>()
            .map(Command::Highlight),
        "status" => Ok(Command::Status),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}', try 'help'", other)),
    }
}

/// A menu as the client builds it for an inventory item
fn item_menu(item_id: i32) -> MenuOpened {
    MenuOpened {
        entries: vec![
            MenuEntry::cancel(),
            MenuEntry {
                option: "Use".to_string(),
                target: format!("<col=ff9040>Item {}", item_id),
                identifier: item_id,
                opcode: MenuOpcode::Other(38),
                param0: 0,
                param1: INVENTORY_WIDGET_ID,
            },
        ],
    }
}

fn print_menu(out: &mut impl Write, entries: &[MenuEntry]) -> io::Result<()> {
    // top row first, as the client displays it
    for (row, entry) in entries.iter().enumerate().rev() {
        writeln!(out, "  [{}] {} {}", row, entry.option, remove_tags(&entry.target))?;
    }
    Ok(())
}

type Plugin = InventoryTagsPlugin<SqliteConfigStore, ConsoleMenus, ConsoleOverlays>;

struct Session {
    plugin: Plugin,
    last_menu: Vec<MenuEntry>,
}

impl Session {
    fn set_setting(&mut self, key: &str, value: Option<String>) -> Result<(), Box<dyn Error>> {
        let store = self.plugin.resolver_mut().store_mut();
        match value {
            Some(value) => store.set(CONFIG_GROUP, key, &value)?,
            None => store.unset(CONFIG_GROUP, key)?,
        }
        let changed = ConfigChanged {
            group: CONFIG_GROUP.to_string(),
            key: key.to_string(),
        };
        dispatch(&mut self.plugin, &HostEvent::ConfigChanged(changed));
        Ok(())
    }

    fn click(&mut self, event: MenuOptionClicked) {
        dispatch(&mut self.plugin, &HostEvent::MenuOptionClicked(event));
    }

    /// Returns false once the session should end
    fn run(&mut self, command: Command, out: &mut impl Write) -> Result<bool, Box<dyn Error>> {
        match command {
            Command::Toggle(option) => {
                let event = WidgetMenuOptionClicked {
                    widget: InventoryTab::Fixed.widget_id(),
                    option: option.to_string(),
                    target: format!("<col=ff9040>{}</col>", MENU_TARGET),
                };
                dispatch(&mut self.plugin, &HostEvent::WidgetMenuOptionClicked(event));
                writeln!(out, "mode: {:?}", self.plugin.mode())?;
            }
            Command::Open(item_id) => {
                let opened = item_menu(item_id);
                match dispatch(&mut self.plugin, &HostEvent::MenuOpened(opened.clone())) {
                    Some(entries) => self.last_menu = entries,
                    None => self.last_menu = opened.entries,
                }
                print_menu(out, &self.last_menu)?;
            }
            Command::Click(row) => match self.last_menu.get(row) {
                Some(entry) => {
                    let event = MenuOptionClicked::from(entry);
                    self.click(event);
                    self.last_menu.clear();
                }
                None => writeln!(out, "no row {} in the last menu", row)?,
            },
            Command::Mark(item_id, group) => self.click(MenuOptionClicked {
                option: MenuAction::Set.option().to_string(),
                target: group.as_str().to_string(),
                identifier: item_id,
                opcode: MenuOpcode::RuneLite,
            }),
            Command::Remove(item_id) => self.click(MenuOptionClicked {
                option: MenuAction::Remove.option().to_string(),
                target: String::new(),
                identifier: item_id,
                opcode: MenuOpcode::RuneLite,
            }),
            Command::SetColor(group, color) => {
                self.set_setting(&GroupColors::key_for(group), color.map(|c| c.to_string()))?
            }
            Command::Amount(amount) => self.set_setting(AMOUNT_KEY, Some(amount))?,
            Command::Tags => {
                let tags = self.plugin.resolver().store().list_tags()?;
                writeln!(out, "{}", serde_json::to_string_pretty(&tags)?)?;
            }
            Command::Highlight(item_ids) => {
                let items: Vec<InventoryItem> = item_ids
                    .into_iter()
                    .enumerate()
                    .map(|(slot, item_id)| InventoryItem { slot, item_id })
                    .collect();
                let highlights = self.plugin.highlights(&items);
                writeln!(out, "{}", serde_json::to_string_pretty(&highlights)?)?;
            }
            Command::Status => {
                writeln!(out, "mode: {:?}", self.plugin.mode())?;
                for option in &self.plugin.menus().registered {
                    writeln!(out, "  {:?}: {} {}", option.widget, option.option, option.target)?;
                }
                writeln!(out, "groups shown: {}", self.plugin.resolver().config().amount.get())?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    std::fs::create_dir_all(&data_dir)?;

    rolling_logger::init_logger(data_dir.join("logs"), "InventoryTags")?;

    let store = SqliteConfigStore::open(&data_dir.join("inventory_tags.db"))?;
    let mut plugin = InventoryTagsPlugin::new(store, ConsoleMenus::default(), ConsoleOverlays);
    plugin.start_up()?;
    let _ = rolling_logger::info(&format!("Host ready, data in {}", data_dir.display()));

    let mut session = Session {
        plugin,
        last_menu: Vec::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "inventory tags host, 'help' for commands")?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let keep_going = match parse_command(&line) {
            Ok(command) => session.run(command, &mut stdout).unwrap_or_else(|e| {
                let _ = rolling_logger::error(&format!("'{}' failed: {}", line.trim(), e));
                let _ = writeln!(stdout, "error: {}", e);
                true
            }),
            Err(msg) => {
                writeln!(stdout, "{}", msg)?;
                true
            }
        };
        if !keep_going {
            break;
        }
    }

    session.plugin.shut_down();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let store = SqliteConfigStore::open_in_memory().unwrap();
        let mut plugin = InventoryTagsPlugin::new(store, ConsoleMenus::default(), ConsoleOverlays);
        plugin.start_up().unwrap();
        Session {
            plugin,
            last_menu: Vec::new(),
        }
    }

    fn run(session: &mut Session, line: &str) -> String {
        let mut out = Vec::new();
        session.run(parse_command(line).unwrap(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("open 995"), Ok(Command::Open(995)));
        assert_eq!(parse_command("mark 4151 7"), Ok(Command::Mark(4151, GroupName::Group7)));
        assert_eq!(
            parse_command("color 2 #00FF00"),
            Ok(Command::SetColor(GroupName::Group2, Some(Color::rgb(0, 255, 0))))
        );
        assert_eq!(parse_command("color 2 none"), Ok(Command::SetColor(GroupName::Group2, None)));
        assert_eq!(parse_command("highlight 1 -1 3"), Ok(Command::Highlight(vec![1, -1, 3])));
        assert!(parse_command("open").is_err());
        assert!(parse_command("mark 1 13").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_open_and_click_tags_item() {
        let mut s = session();
        run(&mut s, "amount 3");
        run(&mut s, "configure");

        let menu = run(&mut s, "open 995");
        assert!(menu.contains("[1] Mark Group 12"));
        assert!(menu.contains("[3] Mark Group 10"));

        run(&mut s, "click 2");
        assert_eq!(s.plugin.resolver().get_tag(995).unwrap(), Some(GroupName::Group11));

        let menu = run(&mut s, "open 995");
        assert!(menu.contains("[2] Remove Group 11"));
    }

    #[test]
    fn test_browse_mode_keeps_client_menu() {
        let mut s = session();
        let menu = run(&mut s, "open 995");
        assert!(menu.contains("Use Item 995"));
        assert!(!menu.contains("Mark"));
    }

    #[test]
    fn test_color_setting_reaches_highlights() {
        let mut s = session();
        run(&mut s, "mark 10 1");
        run(&mut s, "color 1 #FF0000");

        let out = run(&mut s, "highlight 10 11");
        let highlights: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(highlights.as_array().map(|a| a.len()), Some(1));
        assert_eq!(highlights[0]["color"], "#FF0000");

        let tags = run(&mut s, "tags");
        assert!(tags.contains("\"Group 1\""));
    }
}
