fn main() {
    space_battle::game::run();
}
