//! Multi-sensor monitor firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows temperature/humidity, sound level and ambient light on a 128x64 SH1106
//! OLED, one screen at a time.
//!
//! # Architecture
//!
//! Sampling and user interface run on separate cores:
//! - Core 1: Thread executor with the climate, sound and light tasks. Owns the ADC
//!   (shared by the sound and light tasks through a mutex) and the DHT11 pin.
//! - Core 0: Thread executor with the display task, plus an interrupt executor at a
//!   higher priority with the button task, so button polls preempt a render.
//!
//! Every task publishes its state through a `Watch` in [`shared`]; the display task
//! renders the latest snapshots.
//!
//! # Button Controls
//!
//! - **Previous** (GPIO14): Previous screen
//! - **Next** (GPIO15): Next screen

#![no_std]
#![no_main]
// Crate-level lints (match the common crate)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod board;
mod dht11;
mod sh1106;
mod shared;
mod tasks;

use defmt::{info, warn};
use embassy_executor::{Executor, InterruptExecutor, Spawner};
use embassy_rp::adc::{self, Adc};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Flex, Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::multicore::{Stack, spawn_core1};
use embassy_rp::peripherals::I2C0;
use embassy_sync::mutex::Mutex;
use sensor_monitor_common::LightState;
use static_cell::{ConstStaticCell, StaticCell};
use {defmt_rtt as _, panic_probe as _};

use crate::board::{OLED_ADDRESS, i2c_config};
use crate::dht11::Dht11;
use crate::sh1106::Sh1106;
use crate::shared::{CLIMATE, LIGHT, SCREEN, SOUND, SharedAdc};
use crate::tasks::display::Inputs;
use crate::tasks::{button_task, climate_task, display_task, light_task, sound_task};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-sensor-monitor"),
    embassy_rp::binary_info::rp_program_description!(c"Temperature, sound and light monitor on SH1106 OLED"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

// =============================================================================
// Executors
// =============================================================================

static CORE1_STACK: ConstStaticCell<Stack<4096>> = ConstStaticCell::new(Stack::new());
static EXECUTOR1: StaticCell<Executor> = StaticCell::new();
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

static ADC: StaticCell<SharedAdc> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Multi-sensor monitor starting");
    info!("Screens: 0=Climate, 1=Sound, 2=Light");

    let p = embassy_rp::init(Default::default());

    // Sampling peripherals move to core 1 so their interrupts are serviced there
    let adc_peripheral = p.ADC;
    let light_pin = p.PIN_26;
    let microphone_pin = p.PIN_27;
    let dht_pin = p.PIN_22;

    spawn_core1(p.CORE1, CORE1_STACK.take(), move || {
        let executor1 = EXECUTOR1.init(Executor::new());
        executor1.run(|spawner| {
            let mut adc = Adc::new(adc_peripheral, Irqs, adc::Config::default());
            let mut light_channel = adc::Channel::new_pin(light_pin, Pull::None);
            let microphone_channel = adc::Channel::new_pin(microphone_pin, Pull::None);

            let baseline = match adc.blocking_read(&mut light_channel) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Light baseline read failed: {}", defmt::Debug2Format(&e));
                    0
                }
            };
            info!("Light baseline: {}", baseline);

            let adc: &'static SharedAdc = ADC.init(Mutex::new(adc));
            let dht11 = Dht11::new(Flex::new(dht_pin));

            spawner.spawn(climate_task(dht11, CLIMATE.dyn_sender())).unwrap();
            spawner.spawn(sound_task(adc, microphone_channel, SOUND.dyn_sender())).unwrap();
            spawner
                .spawn(light_task(adc, light_channel, LightState::new(baseline), LIGHT.dyn_sender()))
                .unwrap();
            info!("Sampling tasks spawned on core 1");
        })
    });

    // Buttons on the high priority executor (active-low with internal pull-up)
    let btn_previous = Input::new(p.PIN_14, Pull::Up);
    let btn_next = Input::new(p.PIN_15, Pull::Up);

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(button_task(btn_previous, btn_next, SCREEN.sender())).unwrap();
    info!("Button task spawned");

    // OLED on I2C0: SDA=4, SCL=5
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config());
    let display = Sh1106::new(i2c, OLED_ADDRESS);

    let inputs = Inputs {
        climate: CLIMATE.dyn_receiver().unwrap(),
        sound: SOUND.dyn_receiver().unwrap(),
        light: LIGHT.dyn_receiver().unwrap(),
        screen: SCREEN.dyn_receiver().unwrap(),
    };

    spawner.spawn(display_task(display, inputs)).unwrap();
    info!("Display task spawned");
}
