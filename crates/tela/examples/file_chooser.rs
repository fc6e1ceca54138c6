//! Headless walkthrough of a "choose a folder" row.
//!
//! Builds a prompt `TextBox`, styles it through a shared `FontTable`,
//! and paints it into a `DisplayList`, printing the recorded commands.
//! Run with `cargo run --example file_chooser`.

use std::sync::Arc;

use tela::render::{
    DisplayList, FixedMetrics, Font, FontFamily, Justification, Point, Rect,
};
use tela::style::{FontTable, WidgetKind};
use tela::widget::{
    MouseButton, MouseDoubleClickEvent, PaintContext, PaintEvent, TextBox, Widget, WidgetEvent,
};

fn paint_into(widget: &mut TextBox, list: &mut DisplayList, metrics: &FixedMetrics) {
    let mut event = WidgetEvent::Paint(PaintEvent::new(widget.widget_base().rect()));
    widget.event(&mut event);

    let mut ctx = PaintContext::new(list, metrics, widget.widget_base().rect());
    widget.paint(&mut ctx);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tela=debug".into()),
        )
        .init();

    let fonts = Arc::new(FontTable::default());
    fonts.set_kind_font(WidgetKind::Label, "STZhongsong");

    let mut prompt = TextBox::new("folder-prompt");
    prompt.set_geometry(Rect::new(0.0, 0.0, 400.0, 28.0));
    prompt.set_justification(Justification::CENTER_LEFT);
    prompt.editor_mut().set_font(Font::new(
        FontFamily::name(fonts.resolve(WidgetKind::Label)),
        14.0,
    ));
    prompt.editor_mut().set_tooltip("双击可复制路径");
    prompt.set_text("选择文件夹：C:\\Users\\演示\\文档", false);

    let metrics = FixedMetrics::default();
    let mut frame = DisplayList::new();
    paint_into(&mut prompt, &mut frame, &metrics);

    println!("static rendition ({} commands):", frame.len());
    for command in frame.commands() {
        println!("  {command:?}");
    }

    // A left double-click reveals the selectable editor.
    let mut click = WidgetEvent::MouseDoubleClick(MouseDoubleClickEvent::new(
        MouseButton::Left,
        Point::new(10.0, 10.0),
    ));
    prompt.event(&mut click);
    println!(
        "after double-click: editor showing = {}, read-only = {}",
        prompt.is_editor_showing(),
        prompt.editor().is_read_only()
    );

    let mut editing_frame = DisplayList::new();
    paint_into(&mut prompt, &mut editing_frame, &metrics);
    println!(
        "editing rendition paints {} commands (the editor draws itself)",
        editing_frame.len()
    );
}
