use iconforge::Template;

#[test]
fn smoke_render_robot() {
    let c = Template::Robot.render(128).expect("render failed");
    assert_eq!(c.size(), 128);
    assert_eq!(c.pixels().len(), 128 * 128 * 4);
}

#[test]
fn smoke_render_sync_card() {
    let c = Template::SyncCard.render(48).expect("render failed");
    assert_eq!(c.size(), 48);
    assert_eq!(c.pixels().len(), 48 * 48 * 4);
}
